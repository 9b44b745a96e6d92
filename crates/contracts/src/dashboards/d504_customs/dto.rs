use serde::{Deserialize, Serialize};

/// Импортная декларация
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub id: String,
    pub product: String,
    pub hs_code: String,
    pub origin: String,
    pub carrier: String,
    pub value: f64,
    pub tax: f64,
    pub status: String,
}

/// Экспортная декларация
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDeclaration {
    pub id: String,
    pub product: String,
    pub hs_code: String,
    pub destination: String,
    pub carrier: String,
    pub value: f64,
    pub duty: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDataset {
    pub imports: Vec<ImportDeclaration>,
    pub exports: Vec<ExportDeclaration>,
}
