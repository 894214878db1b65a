//! HTML pages for the signup and login forms
//!
//! Everything interpolated into markup goes through [`escape`].

use axum::response::Html;

use warbler_service::SignupForm;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title} | Warbler</title></head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    ))
}

fn flash(error: Option<&str>) -> String {
    error
        .map(|message| format!("<div class=\"alert alert-danger\">{}</div>\n", escape(message)))
        .unwrap_or_default()
}

/// Signup page, refilled with what was submitted (never the password)
pub fn signup_page(form: &SignupForm, error: Option<&str>) -> Html<String> {
    let body = format!(
        "<h2>Join Warbler today.</h2>\n{flash}<form method=\"POST\" action=\"/signup\">\n\
         <input name=\"username\" placeholder=\"Username\" value=\"{username}\">\n\
         <input name=\"email\" type=\"email\" placeholder=\"E-mail\" value=\"{email}\">\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\n\
         <input name=\"image_url\" placeholder=\"(Optional) Image URL\" value=\"{image_url}\">\n\
         <button>Sign me up!</button>\n</form>",
        flash = flash(error),
        username = escape(&form.username),
        email = escape(&form.email),
        image_url = escape(form.image_url.as_deref().unwrap_or_default()),
    );
    page("Sign Up", &body)
}

/// Login page
pub fn login_page(username: &str, error: Option<&str>) -> Html<String> {
    let body = format!(
        "<h2>Welcome back.</h2>\n{flash}<form method=\"POST\" action=\"/login\">\n\
         <input name=\"username\" placeholder=\"Username\" value=\"{username}\">\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\n\
         <button>Log in</button>\n</form>",
        flash = flash(error),
        username = escape(username),
    );
    page("Log In", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape("<script>alert(\"x\" & 'y')</script>"),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#x27;y&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_signup_page_refills_form() {
        let form = SignupForm {
            username: "<b>bob</b>".to_string(),
            email: "bob@test.com".to_string(),
            password: "secret-password".to_string(),
            image_url: None,
        };
        let Html(html) = signup_page(&form, Some("Username already taken"));

        assert!(html.contains("value=\"&lt;b&gt;bob&lt;/b&gt;\""));
        assert!(html.contains("value=\"bob@test.com\""));
        assert!(html.contains("Username already taken"));
        assert!(!html.contains("secret-password"));
    }

    #[test]
    fn test_login_page() {
        let Html(html) = login_page("bob", Some("Invalid credentials."));
        assert!(html.contains("Invalid credentials."));
        assert!(html.contains("value=\"bob\""));

        let Html(html) = login_page("", None);
        assert!(!html.contains("alert"));
    }
}
