//! Project card rendering.
//!
//! Every user-supplied value passes through [`escape_html`] before it is
//! interpolated. Only `http(s)` URLs are allowed into `href`/`src`.

use rand::Rng;

use crate::common::utils::{escape_html, normalize_http_url};
use crate::domains::submissions::Submission;

/// Number of placeholder gradients the site stylesheet defines.
pub const PLACEHOLDER_VARIANTS: u8 = 5;

const REDDIT_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor"><path d="M12 0A12 12 0 0 0 0 12a12 12 0 0 0 12 12 12 12 0 0 0 12-12A12 12 0 0 0 12 0zm5.01 4.744c.688 0 1.25.561 1.25 1.249a1.25 1.25 0 0 1-2.498.056l-2.597-.547-.8 3.747c1.824.07 3.48.632 4.674 1.488.308-.309.73-.491 1.207-.491.968 0 1.754.786 1.754 1.754 0 .716-.435 1.333-1.01 1.614a3.111 3.111 0 0 1 .042.52c0 2.694-3.13 4.87-7.004 4.87-3.874 0-7.004-2.176-7.004-4.87 0-.183.015-.366.043-.534A1.748 1.748 0 0 1 4.028 12c0-.968.786-1.754 1.754-1.754.463 0 .898.196 1.207.49 1.207-.883 2.878-1.43 4.744-1.487l.885-4.182a.342.342 0 0 1 .14-.197.35.35 0 0 1 .238-.042l2.906.617a1.214 1.214 0 0 1 1.108-.701zM9.25 12C8.561 12 8 12.562 8 13.25c0 .687.561 1.248 1.25 1.248.687 0 1.248-.561 1.248-1.249 0-.688-.561-1.249-1.249-1.249zm5.5 0c-.687 0-1.248.561-1.248 1.25 0 .687.561 1.248 1.249 1.248.688 0 1.249-.561 1.249-1.249 0-.687-.562-1.249-1.25-1.249zm-5.466 3.99a.327.327 0 0 0-.231.094.33.33 0 0 0 0 .463c.842.842 2.484.913 2.961.913.477 0 2.105-.056 2.961-.913a.361.361 0 0 0 .029-.463.33.33 0 0 0-.464 0c-.547.533-1.684.73-2.512.73-.828 0-1.979-.196-2.512-.73a.326.326 0 0 0-.232-.095z"/></svg>"#;

const X_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#;

/// Where a project link points, decided from the URL host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    GitHub,
    Reddit,
    X,
    YouTube,
    Generic,
}

impl LinkSource {
    pub fn detect(url: Option<&str>) -> Self {
        let Some(host) = url.and_then(host_of) else {
            return Self::Generic;
        };

        let matches = |domain: &str| host == domain || host.ends_with(&format!(".{domain}"));

        if matches("github.com") {
            Self::GitHub
        } else if matches("reddit.com") {
            Self::Reddit
        } else if matches("x.com") || matches("twitter.com") {
            Self::X
        } else if matches("youtube.com") || matches("youtu.be") {
            Self::YouTube
        } else {
            Self::Generic
        }
    }

    pub fn link_text(self) -> &'static str {
        match self {
            Self::GitHub => "View on GitHub →",
            Self::Reddit => "View on Reddit →",
            Self::X => "View on X →",
            Self::YouTube => "Watch on YouTube →",
            Self::Generic => "View Project →",
        }
    }

    /// Icon badge overlaid on the card image, if the source has one.
    pub fn badge(self) -> Option<String> {
        let icon = match self {
            Self::Reddit => REDDIT_ICON,
            Self::X => X_ICON,
            _ => return None,
        };

        Some(format!(
            "<span class=\"source-badge\">\n                            {icon}\n                        </span>"
        ))
    }
}

fn host_of(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw)
        .or_else(|_| url::Url::parse(&format!("https://{raw}")))
        .ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}

/// Pick one of the placeholder gradients uniformly at random.
pub fn random_placeholder_variant() -> u8 {
    rand::rng().random_range(1..=PLACEHOLDER_VARIANTS)
}

/// Render the card for a submission, choosing a random placeholder if needed.
pub fn render_card(submission: &Submission) -> String {
    render_card_with_placeholder(submission, random_placeholder_variant())
}

/// Render the card with an explicit placeholder gradient (1-based).
pub fn render_card_with_placeholder(submission: &Submission, placeholder_variant: u8) -> String {
    let name = escape_html(&submission.project_name);
    let category = escape_html(&submission.category);
    let author = escape_html(&format!("by {}", submission.creator_name));
    let description = escape_html(&submission.description);

    let project_url = submission
        .project_url
        .as_deref()
        .and_then(normalize_http_url);
    let href = escape_html(project_url.as_deref().unwrap_or("#"));

    let source = LinkSource::detect(project_url.as_deref());
    let link_text = source.link_text();
    let source_badge = source.badge().unwrap_or_default();

    let image_section = match submission.image_url.as_deref().and_then(normalize_http_url) {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"card-img\">",
            escape_html(&src),
            name
        ),
        None => format!(
            "<div class=\"image-placeholder gradient-{}\">\n                            <span class=\"placeholder-icon\">✦</span>\n                        </div>",
            placeholder_variant.clamp(1, PLACEHOLDER_VARIANTS)
        ),
    };

    let first_project_badge = if submission.first_project {
        "\n                        <span class=\"experience-badge\">\n                            <span class=\"badge-icon\">✨</span>\n                            First project ever\n                        </span>"
    } else {
        ""
    };

    format!(
        r#"<!-- Project Card - {name} (Community Submitted) -->
            <article class="project-card" data-category="{category}">
                <a href="{href}" target="_blank" rel="noopener" class="card-image-link">
                    <div class="card-image">
                        {image_section}
                        {source_badge}
                    </div>
                </a>
                <div class="card-content">
                    <div class="card-meta">
                        <span class="meta-tag">{label}</span>
                        <span class="meta-dot">·</span>
                        <span class="meta-author">{author}</span>
                    </div>
                    <h3 class="card-title">{name}</h3>
                    <p class="card-desc">{description}</p>
                    <div class="card-footer">{first_project_badge}
                        <a href="{href}" target="_blank" rel="noopener" class="card-link">{link_text}</a>
                    </div>
                </div>
            </article>"#,
        label = submission.category_label(),
    )
}
