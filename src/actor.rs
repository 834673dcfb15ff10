//! Command actors and the permission nodes they may hold.
//!
//! An [`Actor`] is whoever issued a command: the server console or a player.
//! Authorization is a plain capability check against [`Permission`] nodes;
//! nodes never imply each other.

use std::collections::HashSet;
use std::fmt;

use crate::config::PlayerBlock;

/// Grants every permission when listed in a player block.
pub const WILDCARD_NODE: &str = "reportcard.*";

/// Identity reported by the console actor.
pub const CONSOLE_NAME: &str = "CONSOLE";

/// Named authorization tokens gating the report card commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Add and edit report cards.
    Edit,
    /// Full listings, lookups by id, removal and reload.
    Admin,
    /// List one's own report cards (id and reason only).
    List,
    /// List report cards of other players.
    ListOthers,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::Edit,
        Permission::Admin,
        Permission::List,
        Permission::ListOthers,
    ];

    /// Permission node string as written in config files.
    pub fn node(self) -> &'static str {
        match self {
            Permission::Edit => "reportcard.edit",
            Permission::Admin => "reportcard.admin",
            Permission::List => "reportcard.list",
            Permission::ListOthers => "reportcard.list.others",
        }
    }

    pub fn from_node(node: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.node().eq_ignore_ascii_case(node))
    }

    /// Expand a config node into the permissions it grants.
    ///
    /// Returns `None` for nodes this plugin does not know.
    pub fn expand_node(node: &str) -> Option<Vec<Self>> {
        if node.eq_ignore_ascii_case(WILDCARD_NODE) {
            return Some(Self::ALL.to_vec());
        }
        Self::from_node(node).map(|p| vec![p])
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

/// Whoever issued a command.
pub trait Actor: Send + Sync {
    /// Name recorded as reporter and used as the default listing target.
    fn identity(&self) -> &str;

    fn has_capability(&self, permission: Permission) -> bool;
}

/// The server console. Holds every permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleActor;

impl Actor for ConsoleActor {
    fn identity(&self) -> &str {
        CONSOLE_NAME
    }

    fn has_capability(&self, _permission: Permission) -> bool {
        true
    }
}

/// A player with an explicit set of granted permissions.
#[derive(Debug, Clone)]
pub struct PlayerActor {
    name: String,
    permissions: HashSet<Permission>,
}

impl PlayerActor {
    pub fn new(name: impl Into<String>, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Build a player from its config block. Unknown nodes are skipped with a warning.
    pub fn from_block(block: &PlayerBlock) -> Self {
        let mut permissions = HashSet::new();
        for node in &block.permissions {
            match Permission::expand_node(node) {
                Some(granted) => permissions.extend(granted),
                None => {
                    tracing::warn!(player = %block.name, node = %node, "Ignoring unknown permission node");
                }
            }
        }
        Self {
            name: block.name.clone(),
            permissions,
        }
    }
}

impl Actor for PlayerActor {
    fn identity(&self) -> &str {
        &self.name
    }

    fn has_capability(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
