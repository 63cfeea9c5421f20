//! HTML Export - standalone landing page document
//!
//! Produces one self-contained HTML string: inlined stylesheet, no external
//! resources. Output depends only on its arguments; the footer year is passed
//! in rather than read from the clock.

use log::debug;

use crate::config::ExportConfig;
use crate::content::DerivedContent;
use crate::form::FormInput;

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// Render the complete landing page document.
///
/// Sections, in order: hero, features, testimonials, contact, footer.
/// All user text is HTML-escaped. Brand colors are sanitized instead, since
/// they land inside `<style>` where entities are not decoded.
pub fn export_document(
    input: &FormInput,
    content: &DerivedContent,
    current_year: i32,
    config: &ExportConfig,
) -> String {
    let product = html_escape(&input.product_name);

    let html = format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="Landing page for {product}">
  <meta name="keywords" content="{product}, landing page">
  <meta name="author" content="{author}">
  <title>{product} - Landing Page</title>
  <style>
    :root {{
      --primary-color: {primary};
      --secondary-color: {secondary};
      --text-color: #333;
      --background-color: #fff;
      --light-bg: #f5f5f5;
      --border-color: #e0e0e0;
    }}
{layout_css}  </style>
</head>
<body>
  <!-- Hero Section -->
  <section class="hero">
    <div class="container">
      <h1>{headline}</h1>
      <p>{subtext}</p>
      <a href="#contact" class="btn">{cta}</a>
    </div>
  </section>

  <!-- Features Section -->
  <section class="features">
    <div class="container">
      <h2>Key Features</h2>
      <div class="features-grid">
{features}      </div>
    </div>
  </section>

  <!-- Testimonials Section -->
  <section class="testimonials">
    <div class="container">
      <h2>What Our Customers Say</h2>
      <div class="testimonials-grid">
{testimonials}      </div>
    </div>
  </section>

{contact}
  <!-- Footer -->
  <footer class="footer">
    <div class="container">
      <p>&copy; {year} {product}. All rights reserved.</p>
    </div>
  </footer>
</body>
</html>
"##,
        lang = html_escape(&config.lang),
        product = product,
        author = html_escape(&config.author),
        primary = sanitize_css_value(&input.brand_color_primary),
        secondary = sanitize_css_value(&input.brand_color_secondary),
        layout_css = LAYOUT_CSS,
        headline = html_escape(&content.hero_headline),
        subtext = html_escape(&content.hero_subtext),
        cta = html_escape(&content.cta_text),
        features = render_feature_cards(&content.features_content),
        testimonials = render_testimonial_cards(&content.testimonial_placeholders),
        contact = CONTACT_SECTION,
        year = current_year,
    );

    debug!("rendered landing page document ({} bytes)", html.len());
    html
}

/// One card per feature blurb, headed `Feature {n}` (1-based).
fn render_feature_cards(features: &[String]) -> String {
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            format!(
                r#"        <div class="feature-card">
          <h3>Feature {number}</h3>
          <p>{text}</p>
        </div>
"#,
                number = index + 1,
                text = html_escape(feature),
            )
        })
        .collect()
}

/// Quoted testimonial with placeholder avatar and author labels.
fn render_testimonial_cards(testimonials: &[String]) -> String {
    testimonials
        .iter()
        .map(|testimonial| {
            format!(
                r#"        <div class="testimonial-card">
          <p class="testimonial-text">"{text}"</p>
          <div class="testimonial-author">
            <div class="testimonial-avatar"></div>
            <div>
              <p class="testimonial-name">Customer Name</p>
              <p class="testimonial-title">Customer Title</p>
            </div>
          </div>
        </div>
"#,
                text = html_escape(testimonial),
            )
        })
        .collect()
}

// Static form, no action: the exported page has no backend.
const CONTACT_SECTION: &str = r#"  <!-- Contact Form -->
  <section class="contact" id="contact">
    <div class="container">
      <h2>Get In Touch</h2>
      <form class="contact-form">
        <div class="form-group">
          <label for="name">Full Name</label>
          <input type="text" id="name" required>
        </div>
        <div class="form-group">
          <label for="email">Email</label>
          <input type="email" id="email" required>
        </div>
        <div class="form-group">
          <label for="message">Message</label>
          <textarea id="message" required></textarea>
        </div>
        <button type="submit" class="btn" style="background-color: var(--primary-color);">Submit</button>
      </form>
    </div>
  </section>
"#;

// ─────────────────────────────────────────────────────────────────────────────
// CSS
// ─────────────────────────────────────────────────────────────────────────────

/// Goal-independent design system. Colors come from the `:root` variables.
const LAYOUT_CSS: &str = r#"
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: var(--text-color);
      background-color: var(--background-color);
    }

    .container {
      width: 100%;
      max-width: 1200px;
      margin: 0 auto;
      padding: 0 20px;
    }

    /* Hero Section */
    .hero {
      background-color: var(--primary-color);
      color: white;
      text-align: center;
      padding: 80px 20px;
    }

    .hero h1 {
      font-size: 2.5rem;
      margin-bottom: 20px;
    }

    .hero p {
      font-size: 1.2rem;
      max-width: 800px;
      margin: 0 auto 30px;
    }

    .btn {
      display: inline-block;
      background-color: var(--secondary-color);
      color: white;
      padding: 12px 30px;
      border-radius: 4px;
      font-weight: 600;
      text-decoration: none;
      transition: opacity 0.2s;
    }

    .btn:hover {
      opacity: 0.9;
    }

    /* Features Section */
    .features {
      padding: 80px 0;
    }

    .features h2 {
      text-align: center;
      font-size: 2rem;
      margin-bottom: 50px;
    }

    .features-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 30px;
    }

    .feature-card {
      border: 1px solid var(--border-color);
      border-radius: 8px;
      padding: 30px;
    }

    .feature-card h3 {
      color: var(--primary-color);
      margin-bottom: 15px;
    }

    /* Testimonials Section */
    .testimonials {
      background-color: var(--light-bg);
      padding: 80px 0;
    }

    .testimonials h2 {
      text-align: center;
      font-size: 2rem;
      margin-bottom: 50px;
    }

    .testimonials-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 30px;
      max-width: 1000px;
      margin: 0 auto;
    }

    .testimonial-card {
      background-color: white;
      border-radius: 8px;
      padding: 30px;
      box-shadow: 0 4px 6px rgba(0,0,0,0.05);
    }

    .testimonial-text {
      font-style: italic;
      margin-bottom: 20px;
    }

    .testimonial-author {
      display: flex;
      align-items: center;
    }

    .testimonial-avatar {
      width: 50px;
      height: 50px;
      border-radius: 50%;
      background-color: #ddd;
      margin-right: 15px;
    }

    .testimonial-name {
      font-weight: 600;
    }

    .testimonial-title {
      font-size: 0.9rem;
      color: #666;
    }

    /* Contact Form */
    .contact {
      padding: 80px 0;
    }

    .contact h2 {
      text-align: center;
      font-size: 2rem;
      margin-bottom: 50px;
    }

    .contact-form {
      max-width: 500px;
      margin: 0 auto;
    }

    .form-group {
      margin-bottom: 20px;
    }

    .form-group label {
      display: block;
      margin-bottom: 5px;
      font-weight: 500;
    }

    .form-group input,
    .form-group textarea {
      width: 100%;
      padding: 10px;
      border: 1px solid var(--border-color);
      border-radius: 4px;
      font-family: inherit;
    }

    .form-group textarea {
      height: 150px;
      resize: vertical;
    }

    /* Footer */
    .footer {
      background-color: #333;
      color: white;
      text-align: center;
      padding: 30px 0;
    }

    /* Responsive Design */
    @media (max-width: 768px) {
      .hero h1 {
        font-size: 2rem;
      }

      .hero p {
        font-size: 1rem;
      }

      .features h2,
      .testimonials h2,
      .contact h2 {
        font-size: 1.75rem;
      }
    }
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string for text and attribute positions.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Keep only characters that can appear in a CSS color token.
///
/// Strips anything that could close the declaration, the rule or the
/// `<style>` element (`;`, braces, angle brackets, quotes, ...).
pub fn sanitize_css_value(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || " #(),.%+-/".contains(*c))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> DerivedContent {
        DerivedContent {
            hero_headline: "Headline".to_string(),
            hero_subtext: "Subtext".to_string(),
            cta_text: "Buy Now".to_string(),
            features_content: vec!["one".into(), "two".into(), "three".into()],
            testimonial_placeholders: vec!["first".into(), "second".into()],
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_sanitize_css_value() {
        assert_eq!(sanitize_css_value("#6E59A5"), "#6E59A5");
        assert_eq!(sanitize_css_value("rgb(10, 20, 30)"), "rgb(10, 20, 30)");
        assert_eq!(sanitize_css_value("red;}</style><script>"), "red/stylescript");
    }

    #[test]
    fn test_feature_cards_numbered_from_one() {
        let html = render_feature_cards(&["a".to_string(), "b".to_string()]);
        assert!(html.contains("<h3>Feature 1</h3>\n          <p>a</p>"));
        assert!(html.contains("<h3>Feature 2</h3>\n          <p>b</p>"));
        assert!(!html.contains("Feature 0"));
    }

    #[test]
    fn test_testimonial_cards_quoted() {
        let html = render_testimonial_cards(&["Great & fast".to_string()]);
        assert!(html.contains(r#"<p class="testimonial-text">"Great &amp; fast"</p>"#));
        assert!(html.contains("Customer Name"));
        assert!(html.contains("Customer Title"));
        assert!(html.contains(r#"<div class="testimonial-avatar"></div>"#));
    }

    #[test]
    fn test_colors_bound_to_custom_properties() {
        let input = FormInput {
            brand_color_primary: "#112233".to_string(),
            brand_color_secondary: "#445566".to_string(),
            ..Default::default()
        };
        let html = export_document(&input, &content(), 2025, &ExportConfig::default());
        assert!(html.contains("--primary-color: #112233;"));
        assert!(html.contains("--secondary-color: #445566;"));
    }

    #[test]
    fn test_cta_is_anchor_to_contact() {
        let html = export_document(&FormInput::default(), &content(), 2025, &ExportConfig::default());
        assert!(html.contains(r##"<a href="#contact" class="btn">Buy Now</a>"##));
        assert!(html.contains(r#"<section class="contact" id="contact">"#));
    }

    #[test]
    fn test_config_author_and_lang() {
        let config = ExportConfig { author: "Acme".to_string(), lang: "de".to_string() };
        let html = export_document(&FormInput::default(), &content(), 2025, &config);
        assert!(html.contains(r#"<html lang="de">"#));
        assert!(html.contains(r#"<meta name="author" content="Acme">"#));
    }

    #[test]
    fn test_no_external_resources() {
        let html = export_document(&FormInput::default(), &content(), 2025, &ExportConfig::default());
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("src="));
    }
}
