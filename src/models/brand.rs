pub const SITE_TITLE: &str = "Healsphere - Next-Gen Healthcare Platform";
pub const SITE_DESCRIPTION: &str = "Experience the future of healthcare through Healsphere - A revolutionary platform that integrates cutting-edge technology with human-centered care.";
pub const THEME_COLOR: &str = "#000000";

pub const SUPPORT_EMAIL: &str = "support@healsphere.com";
pub const SUPPORT_PHONE: &str = "+91 9986911532";
pub const SUPPORT_PHONE_HREF: &str = "tel:+919986911532";
pub const OFFICE_ADDRESS: &str =
    "Manyata Embassy Business Park, Hebbal Outer Ring Rd, Nagavara, Bengaluru, Karnataka 560045, India";

const FAVICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><defs><linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" style="stop-color:#00ff88;stop-opacity:1" /><stop offset="100%" style="stop-color:#00ccff;stop-opacity:1" /></linearGradient></defs><rect width="100" height="100" rx="20" fill="#000000"/><circle cx="50" cy="35" r="15" fill="url(#grad)"/><rect x="45" y="48" width="10" height="25" rx="2" fill="url(#grad)"/><rect x="30" y="60" width="40" height="8" rx="2" fill="url(#grad)"/></svg>"##;

/// Inline SVG favicon, usable directly as a `<link href>`.
pub fn favicon_data_uri() -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(FAVICON_SVG))
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}
