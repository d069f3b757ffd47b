//! Helpers shared by the behaviour tests of the `unseen` crates.

/// Expands `\t`, `\n`, `\r` and `\u{XXXX}` escapes so feature files can
/// spell out invisible characters in printable form.
///
/// Escapes that do not name a valid scalar value are kept verbatim.
#[must_use]
pub fn unescape(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(index) = rest.find('\\') {
        let (head, tail) = rest.split_at(index);
        output.push_str(head);
        rest = expand_escape(tail, &mut output);
    }
    output.push_str(rest);
    output
}

/// Expands the escape at the start of `tail` and returns the unread input.
fn expand_escape<'a>(tail: &'a str, output: &mut String) -> &'a str {
    let simple = [("\\t", '\t'), ("\\n", '\n'), ("\\r", '\r')]
        .into_iter()
        .find_map(|(escape, ch)| tail.strip_prefix(escape).map(|after| (ch, after)));
    if let Some((ch, after)) = simple {
        output.push(ch);
        return after;
    }

    let unicode = tail
        .strip_prefix("\\u{")
        .and_then(|body| body.split_once('}'))
        .and_then(|(hex, after)| {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .map(|ch| (ch, after))
        });
    if let Some((ch, after)) = unicode {
        output.push(ch);
        return after;
    }

    output.push('\\');
    tail.get(1..).unwrap_or_default()
}
