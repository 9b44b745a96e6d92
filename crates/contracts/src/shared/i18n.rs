//! Translation provider.
//!
//! Every UI string is addressed by a [`TextKey`]. Each [`Language`] owns one
//! immutable table built on first use. A key missing from a table resolves
//! through the English table, so lookups never fail.

use crate::enums::Language;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed set of translatable UI strings, shared by all tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKey {
    // ── Shell ─────────────────────────────────────────────────────────
    AppTitle,
    Dashboard,
    Procurement,
    Logistics,
    Warehouse,
    Customs,
    SystemStatus,
    AiCoreOptimized,

    // ── Subviews ──────────────────────────────────────────────────────
    OrderAnalysis,
    PriceAnalysis,
    EscalationAnalysis,
    SupplierPerformance,
    BomControl,
    ReservationPerformance,
    Transportation,
    WarehousePerformance,
    InefficiencyCosts,
    CustomsManagement,
    ImportDetails,
    ExportDetails,

    // ── Categories & labels ───────────────────────────────────────────
    RawMaterial,
    ComponentsCat,
    PackagingCat,
    MroCat,
    FinishedGoods,
    Wip,
    StockPackaging,
    ImportLabel,
    ExportLabel,
    LocalLabel,
    OnTime,
    DelayedStatus,

    // ── Insights ──────────────────────────────────────────────────────
    AiInsights,
    Analyze,
    Generating,
    InsightPlaceholder,
    PerformanceAudit,

    // ── Procurement ───────────────────────────────────────────────────
    OrderAnalysisHint,
    PerformAnalysis,
    FetchingData,
    OpenOrders,
    TapCategoryDetail,
    OrderPlural,
    Product,
    Category,
    Quantity,
    Status,
    ActualPrice,
    BudgetPrice,
    PriceDiff,
    ClearSelection,
    CategoryDetails,
    BudgetLabel,
    ActualLabel,
    Variance,
    OverBudgetQty,
    OverBudgetImpact,
    OverBudgetAvgPrice,
    Item,
    CurrentCost,
    NewCost,
    FxChange,
    Inflation,
    RawDelta,
    EnergyDelta,
    LaborDelta,
    BudgetImpact,
    TotalImpact,
    Supplier,
    OnTimeDelivery,
    QualityScore,
    PriceIndex,
    RiskLevel,
    Volume,
    RiskLow,
    RiskMedium,
    RiskHigh,
    ParentItem,
    Component,
    ErrorCode,
    ImpactedDocs,
    Action,

    // ── Logistics ─────────────────────────────────────────────────────
    AvgLoadFactor,
    TotalShipments,
    ShipmentPlan,
    Route,
    Vehicle,
    Load,
    Eta,

    // ── Warehouse ─────────────────────────────────────────────────────
    TotalStock,
    StockByCategory,
    OvertimeHours,
    PeakDay,

    // ── Customs ───────────────────────────────────────────────────────
    TotalImportValue,
    TotalTax,
    EffectiveTaxRate,
    TotalExportValue,
    HsCode,
    Origin,
    Destination,
    Carrier,
    Value,
    Tax,
    Duty,

    // ── Overview ──────────────────────────────────────────────────────
    BudgetUtilization,
    UnitPriceVariance,
    CurrentPrice,
    Target,
    StockMovements,
    Inbound,
    Outbound,
    NetStockMovement,
    BreakEven,
    BreakEvenNotReached,
    Month,
    CumulativeCost,
    CumulativeSavings,
    AnnualSummary,
    TotalOrders,
    TotalValue,
    Trend,
    PoNo,
    ItemCode,
    DeliveryDate,
    Pallets,
    DeclarationNo,

    // ── Misc ──────────────────────────────────────────────────────────
    NoDataYet,
}

impl TextKey {
    /// Все ключи; каждая таблица обязана покрывать этот список.
    pub const ALL: &'static [TextKey] = &[
        TextKey::AppTitle,
        TextKey::Dashboard,
        TextKey::Procurement,
        TextKey::Logistics,
        TextKey::Warehouse,
        TextKey::Customs,
        TextKey::SystemStatus,
        TextKey::AiCoreOptimized,
        TextKey::OrderAnalysis,
        TextKey::PriceAnalysis,
        TextKey::EscalationAnalysis,
        TextKey::SupplierPerformance,
        TextKey::BomControl,
        TextKey::ReservationPerformance,
        TextKey::Transportation,
        TextKey::WarehousePerformance,
        TextKey::InefficiencyCosts,
        TextKey::CustomsManagement,
        TextKey::ImportDetails,
        TextKey::ExportDetails,
        TextKey::RawMaterial,
        TextKey::ComponentsCat,
        TextKey::PackagingCat,
        TextKey::MroCat,
        TextKey::FinishedGoods,
        TextKey::Wip,
        TextKey::StockPackaging,
        TextKey::ImportLabel,
        TextKey::ExportLabel,
        TextKey::LocalLabel,
        TextKey::OnTime,
        TextKey::DelayedStatus,
        TextKey::AiInsights,
        TextKey::Analyze,
        TextKey::Generating,
        TextKey::InsightPlaceholder,
        TextKey::PerformanceAudit,
        TextKey::OrderAnalysisHint,
        TextKey::PerformAnalysis,
        TextKey::FetchingData,
        TextKey::OpenOrders,
        TextKey::TapCategoryDetail,
        TextKey::OrderPlural,
        TextKey::Product,
        TextKey::Category,
        TextKey::Quantity,
        TextKey::Status,
        TextKey::ActualPrice,
        TextKey::BudgetPrice,
        TextKey::PriceDiff,
        TextKey::ClearSelection,
        TextKey::CategoryDetails,
        TextKey::BudgetLabel,
        TextKey::ActualLabel,
        TextKey::Variance,
        TextKey::OverBudgetQty,
        TextKey::OverBudgetImpact,
        TextKey::OverBudgetAvgPrice,
        TextKey::Item,
        TextKey::CurrentCost,
        TextKey::NewCost,
        TextKey::FxChange,
        TextKey::Inflation,
        TextKey::RawDelta,
        TextKey::EnergyDelta,
        TextKey::LaborDelta,
        TextKey::BudgetImpact,
        TextKey::TotalImpact,
        TextKey::Supplier,
        TextKey::OnTimeDelivery,
        TextKey::QualityScore,
        TextKey::PriceIndex,
        TextKey::RiskLevel,
        TextKey::Volume,
        TextKey::RiskLow,
        TextKey::RiskMedium,
        TextKey::RiskHigh,
        TextKey::ParentItem,
        TextKey::Component,
        TextKey::ErrorCode,
        TextKey::ImpactedDocs,
        TextKey::Action,
        TextKey::AvgLoadFactor,
        TextKey::TotalShipments,
        TextKey::ShipmentPlan,
        TextKey::Route,
        TextKey::Vehicle,
        TextKey::Load,
        TextKey::Eta,
        TextKey::TotalStock,
        TextKey::StockByCategory,
        TextKey::OvertimeHours,
        TextKey::PeakDay,
        TextKey::TotalImportValue,
        TextKey::TotalTax,
        TextKey::EffectiveTaxRate,
        TextKey::TotalExportValue,
        TextKey::HsCode,
        TextKey::Origin,
        TextKey::Destination,
        TextKey::Carrier,
        TextKey::Value,
        TextKey::Tax,
        TextKey::Duty,
        TextKey::BudgetUtilization,
        TextKey::UnitPriceVariance,
        TextKey::CurrentPrice,
        TextKey::Target,
        TextKey::StockMovements,
        TextKey::Inbound,
        TextKey::Outbound,
        TextKey::NetStockMovement,
        TextKey::BreakEven,
        TextKey::BreakEvenNotReached,
        TextKey::Month,
        TextKey::CumulativeCost,
        TextKey::CumulativeSavings,
        TextKey::AnnualSummary,
        TextKey::TotalOrders,
        TextKey::TotalValue,
        TextKey::Trend,
        TextKey::PoNo,
        TextKey::ItemCode,
        TextKey::DeliveryDate,
        TextKey::Pallets,
        TextKey::DeclarationNo,
        TextKey::NoDataYet,
    ];
}

type Table = HashMap<TextKey, &'static str>;

const EN: &[(TextKey, &str)] = &[
    (TextKey::AppTitle, "Chain Master"),
    (TextKey::Dashboard, "Dashboard"),
    (TextKey::Procurement, "Procurement"),
    (TextKey::Logistics, "Logistics"),
    (TextKey::Warehouse, "Warehouse"),
    (TextKey::Customs, "Customs"),
    (TextKey::SystemStatus, "System status"),
    (TextKey::AiCoreOptimized, "AI core: optimized"),
    (TextKey::OrderAnalysis, "Order Analysis"),
    (TextKey::PriceAnalysis, "Price Analysis"),
    (TextKey::EscalationAnalysis, "Escalation Analysis"),
    (TextKey::SupplierPerformance, "Supplier Performance"),
    (TextKey::BomControl, "BOM Control"),
    (TextKey::ReservationPerformance, "Reservation Performance"),
    (TextKey::Transportation, "Transportation"),
    (TextKey::WarehousePerformance, "Warehouse Performance"),
    (TextKey::InefficiencyCosts, "Inefficiency Costs"),
    (TextKey::CustomsManagement, "Customs Management"),
    (TextKey::ImportDetails, "Import Details"),
    (TextKey::ExportDetails, "Export Details"),
    (TextKey::RawMaterial, "Raw Material"),
    (TextKey::ComponentsCat, "Components"),
    (TextKey::PackagingCat, "Packaging"),
    (TextKey::MroCat, "MRO"),
    (TextKey::FinishedGoods, "Finished Goods"),
    (TextKey::Wip, "Work in Progress"),
    (TextKey::StockPackaging, "Packaging Stock"),
    (TextKey::ImportLabel, "Import"),
    (TextKey::ExportLabel, "Export"),
    (TextKey::LocalLabel, "Local"),
    (TextKey::OnTime, "On Time"),
    (TextKey::DelayedStatus, "Delayed"),
    (TextKey::AiInsights, "AI Insights"),
    (TextKey::Analyze, "Analyze"),
    (TextKey::Generating, "Generating..."),
    (TextKey::InsightPlaceholder, "Click the button to generate AI insights for the current data."),
    (TextKey::PerformanceAudit, "Performance Audit"),
    (TextKey::OrderAnalysisHint, "Strategic order efficiency and regional supply risk analysis."),
    (TextKey::PerformAnalysis, "Perform Analysis"),
    (TextKey::FetchingData, "Fetching data..."),
    (TextKey::OpenOrders, "Open Orders"),
    (TextKey::TapCategoryDetail, "Tap a category for details"),
    (TextKey::OrderPlural, "orders"),
    (TextKey::Product, "Product"),
    (TextKey::Category, "Category"),
    (TextKey::Quantity, "Quantity"),
    (TextKey::Status, "Status"),
    (TextKey::ActualPrice, "Actual Price"),
    (TextKey::BudgetPrice, "Budget Price"),
    (TextKey::PriceDiff, "Price Diff"),
    (TextKey::ClearSelection, "Clear"),
    (TextKey::CategoryDetails, "Category Details"),
    (TextKey::BudgetLabel, "Budget"),
    (TextKey::ActualLabel, "Actual"),
    (TextKey::Variance, "Variance"),
    (TextKey::OverBudgetQty, "Over-budget Quantity"),
    (TextKey::OverBudgetImpact, "Over-budget Impact"),
    (TextKey::OverBudgetAvgPrice, "Over-budget Avg. Price"),
    (TextKey::Item, "Item"),
    (TextKey::CurrentCost, "Current Cost"),
    (TextKey::NewCost, "New Cost"),
    (TextKey::FxChange, "FX Change"),
    (TextKey::Inflation, "Inflation"),
    (TextKey::RawDelta, "Raw Material Δ"),
    (TextKey::EnergyDelta, "Energy Δ"),
    (TextKey::LaborDelta, "Labor Δ"),
    (TextKey::BudgetImpact, "Budget Impact"),
    (TextKey::TotalImpact, "Total Impact"),
    (TextKey::Supplier, "Supplier"),
    (TextKey::OnTimeDelivery, "On-time Delivery"),
    (TextKey::QualityScore, "Quality"),
    (TextKey::PriceIndex, "Price Index"),
    (TextKey::RiskLevel, "Risk"),
    (TextKey::Volume, "Volume"),
    (TextKey::RiskLow, "Low"),
    (TextKey::RiskMedium, "Medium"),
    (TextKey::RiskHigh, "High"),
    (TextKey::ParentItem, "Parent Item"),
    (TextKey::Component, "Component"),
    (TextKey::ErrorCode, "Error"),
    (TextKey::ImpactedDocs, "Impacted REQ / PO"),
    (TextKey::Action, "Action"),
    (TextKey::AvgLoadFactor, "Avg. Load Factor"),
    (TextKey::TotalShipments, "Total Shipments"),
    (TextKey::ShipmentPlan, "Shipment Plan"),
    (TextKey::Route, "Route"),
    (TextKey::Vehicle, "Vehicle"),
    (TextKey::Load, "Load"),
    (TextKey::Eta, "ETA"),
    (TextKey::TotalStock, "Total Stock"),
    (TextKey::StockByCategory, "Stock by Category"),
    (TextKey::OvertimeHours, "Overtime Hours"),
    (TextKey::PeakDay, "Peak Day"),
    (TextKey::TotalImportValue, "Total Import Value"),
    (TextKey::TotalTax, "Total Tax"),
    (TextKey::EffectiveTaxRate, "Effective Tax Rate"),
    (TextKey::TotalExportValue, "Total Export Value"),
    (TextKey::HsCode, "HS Code"),
    (TextKey::Origin, "Origin"),
    (TextKey::Destination, "Destination"),
    (TextKey::Carrier, "Carrier"),
    (TextKey::Value, "Value"),
    (TextKey::Tax, "Tax"),
    (TextKey::Duty, "Duty"),
    (TextKey::BudgetUtilization, "Budget Utilization"),
    (TextKey::UnitPriceVariance, "Unit Price Variance"),
    (TextKey::CurrentPrice, "Current Price"),
    (TextKey::Target, "Target"),
    (TextKey::StockMovements, "Stock Movements"),
    (TextKey::Inbound, "In"),
    (TextKey::Outbound, "Out"),
    (TextKey::NetStockMovement, "Net Movement"),
    (TextKey::BreakEven, "Break-even"),
    (TextKey::BreakEvenNotReached, "Not reached"),
    (TextKey::Month, "Month"),
    (TextKey::CumulativeCost, "Cumulative cost"),
    (TextKey::CumulativeSavings, "Cumulative savings"),
    (TextKey::AnnualSummary, "Annual summary"),
    (TextKey::TotalOrders, "Total orders"),
    (TextKey::TotalValue, "Total value"),
    (TextKey::Trend, "Trend"),
    (TextKey::PoNo, "PO No"),
    (TextKey::ItemCode, "Item code"),
    (TextKey::DeliveryDate, "Delivery date"),
    (TextKey::Pallets, "Pallets"),
    (TextKey::DeclarationNo, "Declaration No"),
    (TextKey::NoDataYet, "No data is available for this view yet."),
];

const TR: &[(TextKey, &str)] = &[
    (TextKey::AppTitle, "Chain Master"),
    (TextKey::Dashboard, "Gösterge Paneli"),
    (TextKey::Procurement, "Satın Alma"),
    (TextKey::Logistics, "Lojistik"),
    (TextKey::Warehouse, "Depo"),
    (TextKey::Customs, "Gümrük"),
    (TextKey::SystemStatus, "Sistem durumu"),
    (TextKey::AiCoreOptimized, "Yapay zeka çekirdeği: optimize"),
    (TextKey::OrderAnalysis, "Sipariş Analizi"),
    (TextKey::PriceAnalysis, "Fiyat Analizi"),
    (TextKey::EscalationAnalysis, "Eskalasyon Analizi"),
    (TextKey::SupplierPerformance, "Tedarikçi Performansı"),
    (TextKey::BomControl, "Ürün Ağacı Kontrolü"),
    (TextKey::ReservationPerformance, "Rezervasyon Performansı"),
    (TextKey::Transportation, "Taşımacılık"),
    (TextKey::WarehousePerformance, "Depo Performansı"),
    (TextKey::InefficiencyCosts, "Verimsizlik Maliyetleri"),
    (TextKey::CustomsManagement, "Gümrük Yönetimi"),
    (TextKey::ImportDetails, "İthalat Detayları"),
    (TextKey::ExportDetails, "İhracat Detayları"),
    (TextKey::RawMaterial, "Hammadde"),
    (TextKey::ComponentsCat, "Bileşenler"),
    (TextKey::PackagingCat, "Ambalaj"),
    (TextKey::MroCat, "Bakım Malzemesi"),
    (TextKey::FinishedGoods, "Mamul"),
    (TextKey::Wip, "Yarı Mamul"),
    (TextKey::StockPackaging, "Ambalaj Stoğu"),
    (TextKey::ImportLabel, "İthalat"),
    (TextKey::ExportLabel, "İhracat"),
    (TextKey::LocalLabel, "Yurt İçi"),
    (TextKey::OnTime, "Zamanında"),
    (TextKey::DelayedStatus, "Gecikmede"),
    (TextKey::AiInsights, "Yapay Zeka Analizi"),
    (TextKey::Analyze, "Analiz Et"),
    (TextKey::Generating, "Oluşturuluyor..."),
    (TextKey::InsightPlaceholder, "Mevcut veriler için yapay zeka analizi oluşturmak üzere butona tıklayın."),
    (TextKey::PerformanceAudit, "Performans Denetimi"),
    (TextKey::OrderAnalysisHint, "Stratejik sipariş verimliliği ve bölge bazlı tedarik risk analizi."),
    (TextKey::PerformAnalysis, "Analiz Yap"),
    (TextKey::FetchingData, "Veriler alınıyor..."),
    (TextKey::OpenOrders, "Açık Siparişler"),
    (TextKey::TapCategoryDetail, "Detay için kategoriye dokunun"),
    (TextKey::OrderPlural, "sipariş"),
    (TextKey::Product, "Ürün"),
    (TextKey::Category, "Kategori"),
    (TextKey::Quantity, "Miktar"),
    (TextKey::Status, "Durum"),
    (TextKey::ActualPrice, "Gerçekleşen Fiyat"),
    (TextKey::BudgetPrice, "Bütçe Fiyatı"),
    (TextKey::PriceDiff, "Fiyat Farkı"),
    (TextKey::ClearSelection, "Temizle"),
    (TextKey::CategoryDetails, "Kategori Detayları"),
    (TextKey::BudgetLabel, "Bütçe"),
    (TextKey::ActualLabel, "Gerçekleşen"),
    (TextKey::Variance, "Sapma"),
    (TextKey::OverBudgetQty, "Bütçe Üstü Miktar"),
    (TextKey::OverBudgetImpact, "Bütçe Üstü Etki"),
    (TextKey::OverBudgetAvgPrice, "Bütçe Üstü Ort. Fiyat"),
    (TextKey::Item, "Kalem"),
    (TextKey::CurrentCost, "Mevcut Maliyet"),
    (TextKey::NewCost, "Yeni Maliyet"),
    (TextKey::FxChange, "Kur Değişimi"),
    (TextKey::Inflation, "Enflasyon"),
    (TextKey::RawDelta, "Hammadde Δ"),
    (TextKey::EnergyDelta, "Enerji Δ"),
    (TextKey::LaborDelta, "İşçilik Δ"),
    (TextKey::BudgetImpact, "Bütçe Etkisi"),
    (TextKey::TotalImpact, "Toplam Etki"),
    (TextKey::Supplier, "Tedarikçi"),
    (TextKey::OnTimeDelivery, "Zamanında Teslimat"),
    (TextKey::QualityScore, "Kalite"),
    (TextKey::PriceIndex, "Fiyat Endeksi"),
    (TextKey::RiskLevel, "Risk"),
    (TextKey::Volume, "Hacim"),
    (TextKey::RiskLow, "Düşük"),
    (TextKey::RiskMedium, "Orta"),
    (TextKey::RiskHigh, "Yüksek"),
    (TextKey::ParentItem, "Üst Ürün"),
    (TextKey::Component, "Bileşen"),
    (TextKey::ErrorCode, "Hata"),
    (TextKey::ImpactedDocs, "Etkilenen Talep / Sipariş"),
    (TextKey::Action, "Aksiyon"),
    (TextKey::AvgLoadFactor, "Ort. Doluluk Oranı"),
    (TextKey::TotalShipments, "Toplam Sevkiyat"),
    (TextKey::ShipmentPlan, "Sevkiyat Planı"),
    (TextKey::Route, "Güzergah"),
    (TextKey::Vehicle, "Araç"),
    (TextKey::Load, "Doluluk"),
    (TextKey::Eta, "Tahmini Varış"),
    (TextKey::TotalStock, "Toplam Stok"),
    (TextKey::StockByCategory, "Kategoriye Göre Stok"),
    (TextKey::OvertimeHours, "Fazla Mesai Saatleri"),
    (TextKey::PeakDay, "En Yoğun Gün"),
    (TextKey::TotalImportValue, "Toplam İthalat Değeri"),
    (TextKey::TotalTax, "Toplam Vergi"),
    (TextKey::EffectiveTaxRate, "Efektif Vergi Oranı"),
    (TextKey::TotalExportValue, "Toplam İhracat Değeri"),
    (TextKey::HsCode, "GTİP"),
    (TextKey::Origin, "Menşei"),
    (TextKey::Destination, "Varış Ülkesi"),
    (TextKey::Carrier, "Taşıyıcı"),
    (TextKey::Value, "Değer"),
    (TextKey::Tax, "Vergi"),
    (TextKey::Duty, "Gümrük Vergisi"),
    (TextKey::BudgetUtilization, "Bütçe Kullanımı"),
    (TextKey::UnitPriceVariance, "Birim Fiyat Sapması"),
    (TextKey::CurrentPrice, "Güncel Fiyat"),
    (TextKey::Target, "Hedef"),
    (TextKey::StockMovements, "Stok Hareketleri"),
    (TextKey::Inbound, "Giriş"),
    (TextKey::Outbound, "Çıkış"),
    (TextKey::NetStockMovement, "Net Hareket"),
    (TextKey::BreakEven, "Başabaş"),
    (TextKey::BreakEvenNotReached, "Ulaşılmadı"),
    (TextKey::Month, "Ay"),
    (TextKey::CumulativeCost, "Kümülatif maliyet"),
    (TextKey::CumulativeSavings, "Kümülatif tasarruf"),
    (TextKey::AnnualSummary, "Yıllık özet"),
    (TextKey::TotalOrders, "Toplam sipariş"),
    (TextKey::TotalValue, "Toplam değer"),
    (TextKey::Trend, "Trend"),
    (TextKey::PoNo, "PO No"),
    (TextKey::ItemCode, "Ürün kodu"),
    (TextKey::DeliveryDate, "Teslim tarihi"),
    (TextKey::Pallets, "Palet"),
    (TextKey::DeclarationNo, "Beyanname No"),
    (TextKey::NoDataYet, "Bu görünüm için henüz veri yok."),
];

const HI: &[(TextKey, &str)] = &[
    (TextKey::AppTitle, "Chain Master"),
    (TextKey::Dashboard, "डैशबोर्ड"),
    (TextKey::Procurement, "खरीद"),
    (TextKey::Logistics, "लॉजिस्टिक्स"),
    (TextKey::Warehouse, "गोदाम"),
    (TextKey::Customs, "सीमा शुल्क"),
    (TextKey::SystemStatus, "सिस्टम स्थिति"),
    (TextKey::AiCoreOptimized, "एआई कोर: अनुकूलित"),
    (TextKey::OrderAnalysis, "ऑर्डर विश्लेषण"),
    (TextKey::PriceAnalysis, "मूल्य विश्लेषण"),
    (TextKey::EscalationAnalysis, "मूल्य वृद्धि विश्लेषण"),
    (TextKey::SupplierPerformance, "आपूर्तिकर्ता प्रदर्शन"),
    (TextKey::BomControl, "बीओएम नियंत्रण"),
    (TextKey::ReservationPerformance, "आरक्षण प्रदर्शन"),
    (TextKey::Transportation, "परिवहन"),
    (TextKey::WarehousePerformance, "गोदाम प्रदर्शन"),
    (TextKey::InefficiencyCosts, "अक्षमता लागत"),
    (TextKey::CustomsManagement, "सीमा शुल्क प्रबंधन"),
    (TextKey::ImportDetails, "आयात विवरण"),
    (TextKey::ExportDetails, "निर्यात विवरण"),
    (TextKey::RawMaterial, "कच्चा माल"),
    (TextKey::ComponentsCat, "पुर्जे"),
    (TextKey::PackagingCat, "पैकेजिंग"),
    (TextKey::MroCat, "एमआरओ"),
    (TextKey::FinishedGoods, "तैयार माल"),
    (TextKey::Wip, "प्रगति में कार्य"),
    (TextKey::StockPackaging, "पैकेजिंग स्टॉक"),
    (TextKey::ImportLabel, "आयात"),
    (TextKey::ExportLabel, "निर्यात"),
    (TextKey::LocalLabel, "स्थानीय"),
    (TextKey::OnTime, "समय पर"),
    (TextKey::DelayedStatus, "विलंबित"),
    (TextKey::AiInsights, "एआई अंतर्दृष्टि"),
    (TextKey::Analyze, "विश्लेषण करें"),
    (TextKey::Generating, "तैयार हो रहा है..."),
    (TextKey::InsightPlaceholder, "वर्तमान डेटा के लिए एआई अंतर्दृष्टि बनाने हेतु बटन दबाएँ।"),
    (TextKey::PerformanceAudit, "प्रदर्शन ऑडिट"),
    (TextKey::OrderAnalysisHint, "रणनीतिक ऑर्डर दक्षता और क्षेत्रीय आपूर्ति जोखिम विश्लेषण।"),
    (TextKey::PerformAnalysis, "विश्लेषण चलाएँ"),
    (TextKey::FetchingData, "डेटा लाया जा रहा है..."),
    (TextKey::OpenOrders, "खुले ऑर्डर"),
    (TextKey::TapCategoryDetail, "विवरण के लिए श्रेणी चुनें"),
    (TextKey::OrderPlural, "ऑर्डर"),
    (TextKey::Product, "उत्पाद"),
    (TextKey::Category, "श्रेणी"),
    (TextKey::Quantity, "मात्रा"),
    (TextKey::Status, "स्थिति"),
    (TextKey::ActualPrice, "वास्तविक मूल्य"),
    (TextKey::BudgetPrice, "बजट मूल्य"),
    (TextKey::PriceDiff, "मूल्य अंतर"),
    (TextKey::ClearSelection, "हटाएँ"),
    (TextKey::CategoryDetails, "श्रेणी विवरण"),
    (TextKey::BudgetLabel, "बजट"),
    (TextKey::ActualLabel, "वास्तविक"),
    (TextKey::Variance, "अंतर"),
    (TextKey::OverBudgetQty, "बजट से अधिक मात्रा"),
    (TextKey::OverBudgetImpact, "बजट से अधिक प्रभाव"),
    (TextKey::OverBudgetAvgPrice, "बजट से अधिक औसत मूल्य"),
    (TextKey::Item, "मद"),
    (TextKey::CurrentCost, "वर्तमान लागत"),
    (TextKey::NewCost, "नई लागत"),
    (TextKey::FxChange, "विनिमय दर परिवर्तन"),
    (TextKey::Inflation, "मुद्रास्फीति"),
    (TextKey::RawDelta, "कच्चा माल Δ"),
    (TextKey::EnergyDelta, "ऊर्जा Δ"),
    (TextKey::LaborDelta, "श्रम Δ"),
    (TextKey::BudgetImpact, "बजट प्रभाव"),
    (TextKey::TotalImpact, "कुल प्रभाव"),
    (TextKey::Supplier, "आपूर्तिकर्ता"),
    (TextKey::OnTimeDelivery, "समय पर डिलीवरी"),
    (TextKey::QualityScore, "गुणवत्ता"),
    (TextKey::PriceIndex, "मूल्य सूचकांक"),
    (TextKey::RiskLevel, "जोखिम"),
    (TextKey::Volume, "मात्रा (मूल्य)"),
    (TextKey::RiskLow, "कम"),
    (TextKey::RiskMedium, "मध्यम"),
    (TextKey::RiskHigh, "उच्च"),
    (TextKey::ParentItem, "मूल मद"),
    (TextKey::Component, "पुर्जा"),
    (TextKey::ErrorCode, "त्रुटि"),
    (TextKey::ImpactedDocs, "प्रभावित REQ / PO"),
    (TextKey::Action, "कार्रवाई"),
    (TextKey::AvgLoadFactor, "औसत लोड फैक्टर"),
    (TextKey::TotalShipments, "कुल शिपमेंट"),
    (TextKey::ShipmentPlan, "शिपमेंट योजना"),
    (TextKey::Route, "मार्ग"),
    (TextKey::Vehicle, "वाहन"),
    (TextKey::Load, "लोड"),
    (TextKey::Eta, "अनुमानित आगमन"),
    (TextKey::TotalStock, "कुल स्टॉक"),
    (TextKey::StockByCategory, "श्रेणीवार स्टॉक"),
    (TextKey::OvertimeHours, "ओवरटाइम घंटे"),
    (TextKey::PeakDay, "सबसे व्यस्त दिन"),
    (TextKey::TotalImportValue, "कुल आयात मूल्य"),
    (TextKey::TotalTax, "कुल कर"),
    (TextKey::EffectiveTaxRate, "प्रभावी कर दर"),
    (TextKey::TotalExportValue, "कुल निर्यात मूल्य"),
    (TextKey::HsCode, "एचएस कोड"),
    (TextKey::Origin, "मूल देश"),
    (TextKey::Destination, "गंतव्य"),
    (TextKey::Carrier, "वाहक"),
    (TextKey::Value, "मूल्य"),
    (TextKey::Tax, "कर"),
    (TextKey::Duty, "शुल्क"),
    (TextKey::BudgetUtilization, "बजट उपयोग"),
    (TextKey::UnitPriceVariance, "इकाई मूल्य अंतर"),
    (TextKey::CurrentPrice, "वर्तमान मूल्य"),
    (TextKey::Target, "लक्ष्य"),
    (TextKey::StockMovements, "स्टॉक आवाजाही"),
    (TextKey::Inbound, "आवक"),
    (TextKey::Outbound, "जावक"),
    (TextKey::NetStockMovement, "शुद्ध आवाजाही"),
    (TextKey::BreakEven, "ब्रेक-ईवन"),
    (TextKey::BreakEvenNotReached, "नहीं पहुँचा"),
    (TextKey::Month, "महीना"),
    (TextKey::CumulativeCost, "संचयी लागत"),
    (TextKey::CumulativeSavings, "संचयी बचत"),
    (TextKey::AnnualSummary, "वार्षिक सारांश"),
    (TextKey::TotalOrders, "कुल ऑर्डर"),
    (TextKey::TotalValue, "कुल मूल्य"),
    (TextKey::Trend, "रुझान"),
    (TextKey::PoNo, "PO संख्या"),
    (TextKey::ItemCode, "आइटम कोड"),
    (TextKey::DeliveryDate, "डिलीवरी तिथि"),
    (TextKey::Pallets, "पैलेट"),
    (TextKey::DeclarationNo, "घोषणा संख्या"),
    (TextKey::NoDataYet, "इस दृश्य के लिए अभी कोई डेटा उपलब्ध नहीं है।"),
];

static TABLES: Lazy<HashMap<Language, Table>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(Language::En, EN.iter().copied().collect::<Table>());
    tables.insert(Language::Tr, TR.iter().copied().collect::<Table>());
    tables.insert(Language::Hi, HI.iter().copied().collect::<Table>());
    tables
});

/// Resolves `key` in `lang`, falling back to the English table.
pub fn translate(lang: Language, key: TextKey) -> &'static str {
    lookup(&TABLES, lang, key)
}

fn lookup(tables: &HashMap<Language, Table>, lang: Language, key: TextKey) -> &'static str {
    tables
        .get(&lang)
        .and_then(|table| table.get(&key))
        .or_else(|| {
            tables
                .get(&Language::default())
                .and_then(|table| table.get(&key))
        })
        .copied()
        // EN покрывает все ключи (см. тест ниже)
        .unwrap_or("???")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_complete() {
        for lang in Language::all() {
            let table = TABLES.get(&lang).expect("table must exist");
            for key in TextKey::ALL {
                assert!(
                    table.contains_key(key),
                    "{:?} table is missing {:?}",
                    lang,
                    key
                );
            }
            assert_eq!(table.len(), TextKey::ALL.len(), "{:?} has stray keys", lang);
        }
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        let mut tables = HashMap::new();
        tables.insert(Language::En, EN.iter().copied().collect::<Table>());
        tables.insert(
            Language::Tr,
            [(TextKey::Dashboard, "Gösterge Paneli")]
                .into_iter()
                .collect::<Table>(),
        );

        assert_eq!(lookup(&tables, Language::Tr, TextKey::Dashboard), "Gösterge Paneli");
        assert_eq!(lookup(&tables, Language::Tr, TextKey::Customs), "Customs");
        // Таблицы нет вовсе, тоже английский
        assert_eq!(lookup(&tables, Language::Hi, TextKey::Warehouse), "Warehouse");
    }

    #[test]
    fn test_translate_uses_requested_language() {
        assert_eq!(translate(Language::En, TextKey::Procurement), "Procurement");
        assert_eq!(translate(Language::Tr, TextKey::Procurement), "Satın Alma");
        assert_eq!(translate(Language::Hi, TextKey::Procurement), "खरीद");
    }
}
