//! # Menu Catalog
//!
//! The static navigation tree. A [`MenuNode`] is either a *group* (has
//! submenu entries), an *executable leaf* (carries a command line), or an
//! *action leaf* (no command — routed to a named interactive flow by the
//! reducer). The tree is built once at startup and never mutated.
//!
//! The serde field names match the JSON schema accepted for user-supplied
//! menu override files (`menu_file` in the config).

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// One entry in the navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<MenuNode>,
    #[serde(default, rename = "is_executable")]
    pub is_executable: bool,
}

impl MenuNode {
    /// A node with submenu entries is a group. Groups are never directly
    /// executable, regardless of the `is_executable` flag.
    pub fn is_group(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// A leaf that runs its command line verbatim when activated.
    pub fn is_exec_leaf(&self) -> bool {
        !self.is_group() && self.is_executable && !self.command.is_empty()
    }
}

fn group(name: &str, description: &str, submenu: Vec<MenuNode>) -> MenuNode {
    MenuNode {
        name: name.to_string(),
        command: String::new(),
        description: description.to_string(),
        submenu,
        is_executable: false,
    }
}

fn exec(name: &str, command: String, description: &str) -> MenuNode {
    MenuNode {
        name: name.to_string(),
        command,
        description: description.to_string(),
        submenu: Vec::new(),
        is_executable: true,
    }
}

fn action(name: &str, description: &str) -> MenuNode {
    MenuNode {
        name: name.to_string(),
        command: String::new(),
        description: description.to_string(),
        submenu: Vec::new(),
        is_executable: false,
    }
}

/// Title of the root frame.
pub const ROOT_TITLE: &str = "Navigation";

/// The built-in top-level menu, parameterized on the wrapped tool's binary
/// name (normally `oc`).
pub fn main_menu(tool: &str) -> Vec<MenuNode> {
    vec![
        group(
            "Projects & Namespaces",
            "Manage projects and namespaces",
            vec![
                exec("List all projects", format!("{tool} get projects"), "Show all available projects"),
                exec("Current project info", format!("{tool} project"), "Display current project information"),
                action("Switch project", "Interactive project switching"),
                action("Create new project", "Create a new project"),
                action("Delete project", "Delete an existing project"),
            ],
        ),
        group(
            "Workloads",
            "Manage application workloads",
            vec![
                exec("Pods", format!("{tool} get pods"), "List all pods in current namespace"),
                exec("Deployments", format!("{tool} get deployments"), "List all deployments"),
                exec("DeploymentConfigs", format!("{tool} get dc"), "List all deployment configs"),
                exec("ReplicaSets", format!("{tool} get rs"), "List all replica sets"),
                exec("StatefulSets", format!("{tool} get sts"), "List all stateful sets"),
                exec("DaemonSets", format!("{tool} get ds"), "List all daemon sets"),
                exec("Jobs", format!("{tool} get jobs"), "List all jobs"),
                exec("CronJobs", format!("{tool} get cronjobs"), "List all cron jobs"),
            ],
        ),
        group(
            "Services & Routes",
            "Manage networking and access",
            vec![
                exec("Services", format!("{tool} get svc"), "List all services"),
                exec("Routes", format!("{tool} get routes"), "List all routes"),
                exec("Ingress", format!("{tool} get ingress"), "List all ingress resources"),
                exec("Endpoints", format!("{tool} get endpoints"), "List all endpoints"),
                exec("NetworkPolicies", format!("{tool} get networkpolicies"), "List network policies"),
            ],
        ),
        group(
            "Storage",
            "Manage persistent storage",
            vec![
                exec("Persistent Volumes", format!("{tool} get pv"), "List all persistent volumes"),
                exec("Persistent Volume Claims", format!("{tool} get pvc"), "List all PVCs"),
                exec("Storage Classes", format!("{tool} get sc"), "List all storage classes"),
                exec("Volume Snapshots", format!("{tool} get volumesnapshots"), "List volume snapshots"),
            ],
        ),
        group(
            "Configuration",
            "Manage configuration resources",
            vec![
                exec("ConfigMaps", format!("{tool} get configmaps"), "List all config maps"),
                exec("Secrets", format!("{tool} get secrets"), "List all secrets"),
                exec("Service Accounts", format!("{tool} get sa"), "List all service accounts"),
                exec("Role Bindings", format!("{tool} get rolebindings"), "List role bindings"),
                exec("Cluster Role Bindings", format!("{tool} get clusterrolebindings"), "List cluster role bindings"),
            ],
        ),
        group(
            "Monitoring & Logs",
            "Monitor applications and view logs",
            vec![
                exec(
                    "Events",
                    format!("{tool} get events --sort-by=.metadata.creationTimestamp"),
                    "Show recent events",
                ),
                exec("Node status", format!("{tool} get nodes"), "Check node status"),
                exec("Resource usage", format!("{tool} top nodes"), "Show resource usage by nodes"),
                action("Pod logs", "View pod logs"),
                action("Follow logs", "Follow pod logs in real-time"),
            ],
        ),
        group(
            "Build & Deploy",
            "Manage builds and deployments",
            vec![
                exec("Build Configs", format!("{tool} get bc"), "List all build configs"),
                exec("Builds", format!("{tool} get builds"), "List all builds"),
                exec("Image Streams", format!("{tool} get is"), "List all image streams"),
                exec("Image Stream Tags", format!("{tool} get istag"), "List image stream tags"),
                exec("Templates", format!("{tool} get templates"), "List all templates"),
            ],
        ),
        group(
            "Cluster Administration",
            "Cluster-level operations",
            vec![
                exec("Cluster version", format!("{tool} get clusterversion"), "Show cluster version"),
                exec("Cluster operators", format!("{tool} get co"), "List cluster operators"),
                exec("Machine Config Pools", format!("{tool} get mcp"), "List machine config pools"),
                exec("Nodes", format!("{tool} get nodes -o wide"), "List all nodes with details"),
                exec("Namespaces", format!("{tool} get namespaces"), "List all namespaces"),
            ],
        ),
        action("Custom Commands", "Execute a custom command"),
        action("Command History", "View previously executed commands"),
    ]
}

/// Load a user-supplied menu from a JSON file.
///
/// The file holds an array of [`MenuNode`]s that replaces the built-in
/// top-level menu. On any error the caller should fall back to
/// [`main_menu`].
pub fn load_menu_file(path: &Path) -> Result<Vec<MenuNode>, MenuFileError> {
    let contents = fs::read_to_string(path).map_err(MenuFileError::Io)?;
    let nodes: Vec<MenuNode> = serde_json::from_str(&contents).map_err(MenuFileError::Parse)?;
    info!("Loaded {} top-level menu entries from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Resolve the root menu: user override if configured and loadable,
/// built-in otherwise.
pub fn root_menu(tool: &str, menu_file: Option<&Path>) -> Vec<MenuNode> {
    if let Some(path) = menu_file {
        match load_menu_file(path) {
            Ok(nodes) if !nodes.is_empty() => return nodes,
            Ok(_) => warn!("Menu file {} is empty, using built-in menu", path.display()),
            Err(e) => warn!("Failed to load menu file {}: {}", path.display(), e),
        }
    }
    main_menu(tool)
}

#[derive(Debug)]
pub enum MenuFileError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for MenuFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuFileError::Io(e) => write!(f, "menu file I/O error: {e}"),
            MenuFileError::Parse(e) => write!(f, "menu file parse error: {e}"),
        }
    }
}

impl std::error::Error for MenuFileError {}
