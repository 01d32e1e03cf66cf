// SPDX-License-Identifier: MPL-2.0
//! Loading and formatting of the embedded Fluent resources.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

/// Parses every embedded `<locale>.ftl` file into a bundle.
///
/// Files with an unparsable name or syntax errors are skipped with a warning.
pub fn load_bundles() -> Bundles {
    let mut bundles = HashMap::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            tracing::warn!(file = filename, "ignoring translation file with invalid locale");
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((_, errors)) => {
                tracing::warn!(file = filename, errors = errors.len(), "invalid FTL file");
                continue;
            }
        };

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Plain text output; isolation marks show up as boxes in some fonts.
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(file = filename, errors = errors.len(), "duplicate FTL messages");
        }
        bundles.insert(locale, bundle);
    }

    bundles
}

/// Formats `key` with optional arguments. Returns `None` when the message is
/// missing or fails to format.
pub fn format(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs<'_>>,
) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    errors.is_empty().then(|| value.into_owned())
}

/// Builds Fluent arguments from string pairs.
pub fn args_from<'a>(pairs: &[(&'a str, &'a str)]) -> FluentArgs<'a> {
    let mut args = FluentArgs::new();
    for (name, value) in pairs {
        args.set(*name, *value);
    }
    args
}
