//! Template resolution: pick the variant for a (recipient, method) pair and
//! lay an excuse override over it.

use std::borrow::Cow;

use crate::entity::{ApologyVariant, Excuse, Method, Recipient, Situation};

/// Resolve the content to show for a request.
///
/// Returns `None` when the situation has no variant for the pair ("template
/// not ready"). An excuse without an override for the matched variant is
/// ignored and the base variant is returned.
///
/// The base variant is returned borrowed; a merged variant is a fresh owned
/// value, so the catalog is never written to.
pub fn resolve(
    situation: &Situation,
    recipient: Recipient,
    method: Method,
    excuse: Option<Excuse>,
) -> Option<Cow<'_, ApologyVariant>> {
    let base = situation.variant(recipient, method)?;

    let Some(excuse) = excuse else {
        return Some(Cow::Borrowed(base));
    };

    match base.excuse_overrides.get(&excuse) {
        Some(patch) => Some(Cow::Owned(ApologyVariant {
            recipient: base.recipient,
            method: base.method,
            content: patch.apply(&base.content),
            excuse_overrides: base.excuse_overrides.clone(),
        })),
        None => {
            tracing::debug!(
                slug = %situation.slug,
                %recipient,
                %method,
                %excuse,
                "no override for excuse, using base content"
            );
            Some(Cow::Borrowed(base))
        }
    }
}

/// Excuses with an override for the matched variant, in enumeration order.
pub fn available_excuses(situation: &Situation, recipient: Recipient, method: Method) -> Vec<Excuse> {
    situation
        .variant(recipient, method)
        .map(|v| v.excuse_overrides.keys().copied().collect())
        .unwrap_or_default()
}
