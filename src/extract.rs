//! Extraction pipeline.
//!
//! compile patterns → prepare → score → assemble → render → title.
//! Every call parses its own document; nothing is shared between calls
//! except the compiled default patterns.

use tracing::{debug, trace};

use crate::assemble::assemble;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::ClassPatterns;
use crate::prepare::prepare;
use crate::result::ExtractionResult;
use crate::sanitize::render;
use crate::scoring::{score_candidates, top_candidate};
use crate::title::select_title;

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractionResult> {
    options.validate()?;
    let patterns = ClassPatterns::from_options(options)?;

    debug!(len = html.len(), "starting content extraction");

    let prepared = prepare(html, &patterns)?;
    let candidates = score_candidates(&prepared, &patterns, options);

    let Some(winner) = top_candidate(&prepared, &candidates) else {
        debug!("no candidate scored positively");
        return Err(Error::NoContentFound);
    };
    debug!(
        candidates = candidates.len(),
        score = winner.score,
        text_len = winner.text_len,
        "selected content root"
    );
    for runner_up in candidates.iter().filter(|c| c.id != winner.id).take(4) {
        trace!(score = runner_up.score, text_len = runner_up.text_len, "runner-up");
    }

    let region = assemble(&winner, &candidates, &prepared, options)?;
    let rendered = render(&region);
    if rendered.text.is_empty() {
        debug!("content region rendered no text");
        return Err(Error::NoContentFound);
    }

    let title = select_title(prepared.document(), Some(&region), options);
    debug!(
        title_len = title.len(),
        text_len = rendered.text.len(),
        "extraction complete"
    );

    Ok(ExtractionResult {
        title,
        content_text: rendered.text,
        content_html: rendered.html,
    })
}
