//! Checks that need more than one key to decide.

use forma_core::Framework;
use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

pub(super) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.output.dir.as_os_str().is_empty() {
        return Err(ctx.validation_error(
            "output directory must not be empty",
            find_key_span(ctx.src(), "dir"),
        ));
    }

    if manifest.files.stories && manifest.component.framework == Framework::Native {
        return Err(ctx.validation_error(
            "stories are only generated for web components",
            find_key_span(ctx.src(), "stories"),
        ));
    }

    Ok(())
}

/// Find the span of a `key = value` key in the TOML source.
///
/// Keys are unique across sections, so the first match is the one.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
