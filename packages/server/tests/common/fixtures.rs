//! Test fixtures: a trimmed showcase page and submission bodies.

use serde_json::{json, Value};

/// Showcase page with one existing card and the load-more container.
pub const SHOWCASE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <main>
        <div class="projects-grid">
            <!-- Project Card - Existing -->
            <article class="project-card">Existing</article>
        </div>

        <div class="load-more-container">
            <button>Load more</button>
        </div>
    </main>
</body>
</html>
"#;

pub fn valid_submission() -> Value {
    json!({
        "projectName": "Pixel Garden",
        "creatorName": "sprout",
        "email": "sprout@example.com",
        "projectUrl": "https://github.com/sprout/pixel-garden",
        "imageUrl": "",
        "category": "visualizer",
        "description": "A tiny generative garden that grows as you type.",
        "firstProject": "on"
    })
}

pub fn approval(reason: &str) -> Value {
    json!({ "approved": true, "reason": reason })
}
