use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// The set is closed: each variant gates one kind of screen or write in the
/// application. Serialized names are stable (e.g. `"reports.view"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "products.create")]
    AddProduct,
    #[serde(rename = "products.edit")]
    EditProduct,
    #[serde(rename = "products.delete")]
    DeleteProduct,
    #[serde(rename = "reports.view")]
    ViewReports,
    #[serde(rename = "users.manage")]
    ManageUsers,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::AddProduct,
        Permission::EditProduct,
        Permission::DeleteProduct,
        Permission::ViewReports,
        Permission::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::AddProduct => "products.create",
            Permission::EditProduct => "products.edit",
            Permission::DeleteProduct => "products.delete",
            Permission::ViewReports => "reports.view",
            Permission::ManageUsers => "users.manage",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
