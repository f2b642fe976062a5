//! Server-rendered pages. User supplied text must go through [`escape_html`].

const INDEX_PAGE: &str = include_str!("../static/index.html");
const ADMIN_PAGE: &str = include_str!("../static/admin.html");

/// Escape text for inclusion in HTML element content or quoted attributes
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Public submission form
pub fn render_index_page() -> &'static str {
    INDEX_PAGE
}

/// Dashboard shell; records are fetched client-side from the admin API
pub fn render_admin_page() -> &'static str {
    ADMIN_PAGE
}

pub fn render_thank_you_page(name: &str) -> String {
    format!(
        r#"<div style="font-family: Arial; max-width:600px; margin:60px auto; text-align:center;">
  <h2 style="color:#0078d7">Thank you, {}!</h2>
  <p>Your voucher has been submitted successfully.</p>
  <a href="/" style="color:#0078d7">&larr; Back to Home</a>
</div>"#,
        escape_html(name)
    )
}

pub fn render_login_page() -> &'static str {
    r#"<div style="font-family:Arial; max-width:400px; margin:100px auto;">
  <h2 style="color:#0078d7;">Admin Login</h2>
  <form method="POST" action="/admin/login">
    <input name="password" type="password" placeholder="Enter Password" style="width:100%;padding:10px;margin:10px 0;border:1px solid #ccc;border-radius:6px;" required>
    <button style="width:100%;padding:10px;background:#0078d7;color:#fff;border:none;border-radius:6px;">Login</button>
  </form>
</div>"#
}

pub fn render_login_failed_page() -> &'static str {
    r#"Incorrect password. <a href="/admin">Try again</a>"#
}
