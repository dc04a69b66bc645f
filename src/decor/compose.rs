//! Walks a decoration chain and writes whatever it resolves to

use std::io::Write;

use crate::template::{replace_keys, KeyValueMap};

use super::{DecorError, Region, Resolution};

/// Longest fallback chain followed before giving up
pub const MAX_CHAIN_DEPTH: usize = 32;

/// Write `region` starting from an already resolved first step
///
/// Fallback hops are followed iteratively until a provider yields a
/// fragment or content. Running off the end of the chain is a
/// configuration error, nothing is written in that case.
pub fn compose(
    first: Resolution<'_>,
    region: Region,
    out: &mut dyn Write,
    ctx: &dyn KeyValueMap,
) -> Result<(), DecorError> {
    let mut step = first;
    let mut hops = 0;

    loop {
        match step {
            Resolution::Fragment(text) => return write_fragment(region, text, out, ctx),
            Resolution::Content(text) => {
                out.write_all(text.as_bytes())?;
                return Ok(());
            }
            Resolution::Fallback(Some(next)) => {
                hops += 1;
                if hops > MAX_CHAIN_DEPTH {
                    return Err(DecorError::ChainTooDeep {
                        region,
                        max: MAX_CHAIN_DEPTH,
                    });
                }
                tracing::trace!(%region, hops, "using default page decorations");
                step = next.resolve(region);
            }
            Resolution::Fallback(None) => return Err(DecorError::MissingFallback { region }),
        }
    }
}

fn write_fragment(
    region: Region,
    text: &str,
    out: &mut dyn Write,
    ctx: &dyn KeyValueMap,
) -> Result<(), DecorError> {
    if region.substitutes_keys() {
        out.write_all(replace_keys(text, ctx).as_bytes())?;
    } else {
        // style blocks are written verbatim and always end the line
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
