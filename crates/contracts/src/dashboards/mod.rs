pub mod d500_overview;
pub mod d501_procurement;
pub mod d502_logistics;
pub mod d503_warehouse;
pub mod d504_customs;
