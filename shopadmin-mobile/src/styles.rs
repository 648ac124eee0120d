//! Stylesheet for the mobile product screens

/// One column on phones, two from 600px up. Cards lift on hover.
pub const MOBILE_STYLES: &str = r#"
.products-grid { display: grid; grid-template-columns: 1fr; gap: 24px; }
@media (min-width: 600px) {
    .products-grid { grid-template-columns: 1fr 1fr; }
}
.card { display: flex; flex-direction: column; border-radius: 8px; overflow: hidden; background: #fff; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); transition: transform 0.3s ease, box-shadow 0.3s ease; }
.card:hover { transform: translateY(-5px); box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15); }
.card-media { width: 100%; height: 180px; object-fit: cover; }
.card-content { padding: 24px; }
.card-actions { display: flex; justify-content: space-between; align-items: center; padding: 16px; border-top: 1px solid #f0f0f0; background-color: #f9f9f9; }
.product-title { font-weight: bold; text-transform: capitalize; margin: 0 0 8px 0; }
.product-status { display: flex; align-items: center; gap: 8px; margin-bottom: 16px; color: #666; }
.product-sale-price { color: #1976d2; margin-bottom: 8px; }
.product-date { color: #666; font-size: 0.875rem; margin: 4px 0; }
.label { font-weight: bold; }
.status-badge { font-size: 0.75rem; }
.status-active { color: #2e7d32; }
.status-inactive { color: #666; }
.mobile-button { display: inline-block; padding: 8px 16px; border-radius: 4px; text-decoration: none; }
.mobile-button.primary { background: #1976d2; color: #fff; }
.icon-button { background: none; border: none; font-size: 1.25rem; cursor: pointer; transition: color 0.3s ease; }
.icon-button.danger { color: #d32f2f; }
.icon-button.danger:hover { color: #c62828; }
"#;
