use serde::{Deserialize, Serialize};

use crate::Permission;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    /// Permissions granted to a newly created user with this role.
    ///
    /// Staff can maintain the catalog and read reports, but cannot delete
    /// products or administer users.
    pub fn default_permissions(&self) -> Vec<Permission> {
        match self {
            Role::Admin => Permission::ALL.to_vec(),
            Role::Staff => vec![
                Permission::AddProduct,
                Permission::EditProduct,
                Permission::ViewReports,
            ],
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
