use super::dto::{ExportDeclaration, ImportDeclaration};

pub fn total_import_value(imports: &[ImportDeclaration]) -> f64 {
    imports.iter().map(|d| d.value).sum()
}

pub fn total_import_tax(imports: &[ImportDeclaration]) -> f64 {
    imports.iter().map(|d| d.tax).sum()
}

/// Эффективная ставка налога, %; `None` при нулевой стоимости импорта
pub fn effective_tax_rate(imports: &[ImportDeclaration]) -> Option<f64> {
    let value = total_import_value(imports);
    if value == 0.0 {
        None
    } else {
        Some(total_import_tax(imports) / value * 100.0)
    }
}

pub fn total_export_value(exports: &[ExportDeclaration]) -> f64 {
    exports.iter().map(|d| d.value).sum()
}

pub fn total_export_duty(exports: &[ExportDeclaration]) -> f64 {
    exports.iter().map(|d| d.duty).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d504_customs::sample::sample_dataset;

    #[test]
    fn test_import_totals() {
        let data = sample_dataset();
        assert_eq!(total_import_value(&data.imports), 147_000.0);
        assert_eq!(total_import_tax(&data.imports), 26_460.0);
        let rate = effective_tax_rate(&data.imports).unwrap();
        assert!((rate - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_tax_rate_without_imports() {
        assert_eq!(effective_tax_rate(&[]), None);
    }

    #[test]
    fn test_export_totals() {
        let data = sample_dataset();
        assert_eq!(total_export_value(&data.exports), 257_000.0);
        assert_eq!(total_export_duty(&data.exports), 0.0);
    }
}
