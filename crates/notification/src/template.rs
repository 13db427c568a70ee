use anyhow::Context;
use askama::Template;
use zeno_contact::Inquiry;

#[derive(Template)]
#[template(path = "inquiry.html")]
pub struct InquiryHtmlTemplate<'a> {
    pub inquiry: &'a Inquiry,
    pub brand: &'a str,
}

#[derive(Template)]
#[template(path = "inquiry.txt")]
pub struct InquiryPlainTemplate<'a> {
    pub inquiry: &'a Inquiry,
    pub brand: &'a str,
}

/// Renders the operator notification as `(html, plain)`.
pub fn render_inquiry(inquiry: &Inquiry, brand: &str) -> anyhow::Result<(String, String)> {
    let html = InquiryHtmlTemplate { inquiry, brand }
        .render()
        .context("Failed to render HTML email template")?;

    let plain = InquiryPlainTemplate { inquiry, brand }
        .render()
        .context("Failed to render plain text email template")?;

    Ok((html, plain))
}
