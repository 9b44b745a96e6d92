use serde::{Deserialize, Serialize};

/// Регион закупки для анализа открытых заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "TR")]
    Turkey,
    #[serde(rename = "IN")]
    India,
}

impl Region {
    /// Короткий код региона (TR / IN)
    pub fn code(&self) -> &'static str {
        match self {
            Region::Turkey => "TR",
            Region::India => "IN",
        }
    }

    /// Значение поля `origin` у заказов этого региона
    pub fn origin(&self) -> &'static str {
        match self {
            Region::Turkey => "Turkey",
            Region::India => "India",
        }
    }

    /// Подпись хаба в таблице открытых заказов
    pub fn hub_name(&self) -> &'static str {
        match self {
            Region::Turkey => "Turkey Hub",
            Region::India => "India Hub",
        }
    }

    pub fn all() -> Vec<Region> {
        vec![Region::Turkey, Region::India]
    }
}
