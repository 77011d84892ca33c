//! HTML rendering for the fixture pages
//!
//! Plain string templates; every element the suite locates carries a
//! `data-testid` attribute. The login form validates empty fields
//! client-side and suppresses the POST, so an empty submission leaves
//! the browser on the login page with the inline indicators shown.

const LOGIN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sign in</title>
<style>
  body { font-family: sans-serif; margin: 4rem auto; max-width: 22rem; }
  .field { margin-bottom: 1rem; }
  .field input { width: 100%; }
  .field-error { color: #b00020; display: none; }
  .banner { color: #b00020; border: 1px solid #b00020; padding: 0.5rem; margin-bottom: 1rem; }
</style>
</head>
<body>
<h1>Sign in</h1>
<!-- banner -->
<form id="login-form" method="post" action="/login" novalidate>
  <div class="field">
    <label for="email">Email</label>
    <input id="email" name="email" type="email" data-testid="email-input">
    <span class="field-error" data-testid="email-error">Email is required</span>
  </div>
  <div class="field">
    <label for="password">Password</label>
    <input id="password" name="password" type="password" data-testid="password-input">
    <span class="field-error" data-testid="password-error">Password is required</span>
  </div>
  <div class="field">
    <label><input name="remember_me" value="1" type="checkbox" data-testid="remember-me-checkbox"> Remember me</label>
  </div>
  <button type="submit" data-testid="login-button">Sign in</button>
</form>
<script>
  document.getElementById('login-form').addEventListener('submit', (event) => {
    const email = document.querySelector('[data-testid="email-input"]').value.trim();
    const password = document.querySelector('[data-testid="password-input"]').value;
    const emailError = document.querySelector('[data-testid="email-error"]');
    const passwordError = document.querySelector('[data-testid="password-error"]');
    emailError.style.display = email ? 'none' : 'inline';
    passwordError.style.display = password ? 'none' : 'inline';
    if (!email || !password) {
      event.preventDefault();
    }
  });
</script>
</body>
</html>
"#;

/// Render the login page, with the error banner when a submission was
/// rejected
pub fn login_page(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(
            r#"<div class="banner" data-testid="error-message">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    LOGIN_TEMPLATE.replace("<!-- banner -->", &banner)
}

/// Render the dashboard for a signed-in user
pub fn dashboard_page(email: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Dashboard</title>
</head>
<body>
<h1>Dashboard</h1>
<p>Signed in as <span data-testid="username">{}</span></p>
<a href="/login">Sign out</a>
</body>
</html>
"#,
        escape_html(email)
    )
}

/// Minimal HTML escaping for interpolated values
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
