//! Template engine for the preview frame and the index page.

use minijinja::{context, Environment};

/// Context for rendering one framed preview.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FrameContext {
    /// Template name, e.g. `welcome-email-branded`
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Subject line shown above the email
    pub subject: String,
    /// Preheader shown under the subject
    pub preheader: String,
    /// Rendered email HTML
    pub content: String,
}

/// One card on the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexCard {
    /// Human-readable title
    pub title: String,
    /// Preview file, relative to the index
    pub path: String,
    /// Badge CSS class
    pub kind_class: String,
    /// Badge text
    pub kind_label: String,
}

/// Context for rendering the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    pub cards: Vec<IndexCard>,
    /// Date the previews were generated
    pub generated_on: String,
    /// Where the sample configuration came from
    pub config_source: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("frame.html".to_string(), FRAME_TEMPLATE.to_string())
            .expect("Failed to add frame template");

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        Self { env }
    }

    /// Wrap a rendered email in the preview frame.
    pub fn render_frame(&self, context: &FrameContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("frame.html")?;

        tmpl.render(context! {
            name => &context.name,
            label => &context.label,
            subject => &context.subject,
            preheader => &context.preheader,
            content => &context.content,
        })
    }

    /// Render the index page.
    pub fn render_index(&self, context: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            cards => &context.cards,
            generated_on => &context.generated_on,
            config_source => &context.config_source,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const FRAME_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ name }} - Email Preview</title>
  <style>
    body {
      margin: 0;
      padding: 20px;
      background: #f5f5f5;
      display: flex;
      justify-content: center;
      align-items: flex-start;
      min-height: 100vh;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }
    .preview-container {
      background: white;
      box-shadow: 0 4px 12px rgba(0,0,0,0.15);
      border-radius: 8px;
      overflow: hidden;
      max-width: 600px;
      width: 100%;
      position: relative;
    }
    .preview-label {
      background: #f8f9fa;
      padding: 8px 16px;
      border-bottom: 1px solid #e9ecef;
      font-size: 12px;
      color: #6c757d;
      text-align: center;
    }
    .preview-header {
      background: #ffffff;
      padding: 16px 20px;
      border-bottom: 1px solid #e9ecef;
    }
    .preview-field-label {
      font-size: 11px;
      font-weight: 500;
      color: #95a5a6;
      text-transform: uppercase;
      letter-spacing: 0.5px;
      margin-bottom: 4px;
    }
    .preview-subject {
      font-size: 16px;
      font-weight: 600;
      color: #2c3e50;
      margin: 0 0 8px 0;
    }
    .preview-preheader {
      font-size: 13px;
      color: #6c757d;
      margin: 0;
      font-style: italic;
    }
    .email-content {
      all: initial;
      display: block;
      font-family: inherit;
    }
    .email-content * {
      box-sizing: border-box;
    }
  </style>
</head>
<body>
  <div class="preview-container">
    <div class="preview-label">{{ label }}</div>
    <div class="preview-header">
      <div>
        <div class="preview-field-label">Subject:</div>
        <div class="preview-subject">{{ subject }}</div>
      </div>
      <div style="margin-top: 12px;">
        <div class="preview-field-label">Preheader:</div>
        <div class="preview-preheader">{{ preheader }}</div>
      </div>
    </div>
    <div class="email-content">
      {{ content | safe }}
    </div>
  </div>
</body>
</html>"##;

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Email Template Examples</title>
  <style>
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      line-height: 1.6;
      max-width: 1200px;
      margin: 0 auto;
      padding: 40px 20px;
      background: #f8f9fa;
    }
    h1 {
      color: #2c3e50;
      text-align: center;
      margin-bottom: 40px;
    }
    .template-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
      gap: 30px;
      margin-bottom: 40px;
    }
    .template-card {
      background: white;
      border-radius: 8px;
      padding: 20px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }
    .template-card h3 {
      margin-top: 0;
      color: #34495e;
      font-size: 18px;
    }
    .template-card iframe {
      width: 100%;
      height: 400px;
      border: 1px solid #e0e0e0;
      border-radius: 4px;
    }
    .template-type {
      display: inline-block;
      padding: 4px 8px;
      background: #3498db;
      color: white;
      border-radius: 4px;
      font-size: 12px;
      margin-bottom: 10px;
    }
    .template-type.confirmation { background: #e74c3c; }
    .template-type.welcome { background: #27ae60; }
    .template-actions { margin-top: 10px; }
    .template-actions a {
      display: inline-block;
      padding: 6px 12px;
      background: #3498db;
      color: white;
      text-decoration: none;
      border-radius: 4px;
      font-size: 12px;
      margin-right: 8px;
    }
    .template-actions a:hover { background: #2980b9; }
    .instructions {
      background: #e8f4fd;
      border: 1px solid #bee5eb;
      border-radius: 8px;
      padding: 20px;
      margin-bottom: 30px;
    }
    .instructions h2 {
      margin-top: 0;
      color: #0c5460;
    }
    code {
      background: #f8f9fa;
      padding: 2px 4px;
      border-radius: 3px;
      font-family: 'Monaco', 'Menlo', monospace;
    }
    .footer {
      text-align: center;
      color: #95a5a6;
      font-size: 14px;
    }
  </style>
</head>
<body>
  <h1>Email Template Examples</h1>

  <div class="instructions">
    <h2>Taking screenshots</h2>
    <ol>
      <li><strong>Open a template:</strong> use "Open Full Size" under any card</li>
      <li><strong>Capture it:</strong> use your browser's screenshot tool or dev tools</li>
      <li><strong>Keep sizes consistent:</strong> 800px wide works well</li>
      <li><strong>Name files after the template:</strong> e.g. <code>confirmation-email-minimal.png</code></li>
    </ol>
  </div>

  <div class="template-grid">
  {% for card in cards %}
    <div class="template-card">
      <span class="template-type {{ card.kind_class }}">{{ card.kind_label }}</span>
      <h3>{{ card.title }}</h3>
      <iframe src="{{ card.path }}" loading="lazy"></iframe>
      <div class="template-actions">
        <a href="{{ card.path }}" target="_blank">Open Full Size</a>
        <a href="{{ card.path }}" download>Download HTML</a>
      </div>
    </div>
  {% endfor %}
  </div>

  <div class="footer">
    <p>Generated on {{ generated_on }}</p>
    <p>Sample values come from <code>{{ config_source }}</code></p>
  </div>
</body>
</html>"##;
