//! Characters known to the Batcomputer

/// Alias, real name, actor, memorable line and icon
struct Character {
    alias: &'static str,
    name: &'static str,
    actor: &'static str,
    line: &'static str,
    icon: &'static str,
}

const CHARACTERS: [Character; 3] = [
    Character {
        alias: "batman",
        name: "Bruce Wayne",
        actor: "Christian Bale",
        line: "Sometimes the truth isn't good enough, sometimes people deserve more. \
               Sometimes people deserve to have their faith rewarded...",
        icon: "\u{1f987}",
    },
    Character {
        alias: "joker",
        name: "Jack Napier",
        actor: "Heath Ledger",
        line: "Why so serious?",
        icon: "\u{1f921}",
    },
    Character {
        alias: "two-face",
        name: "Harvey Dent",
        actor: "Aaron Eckhart",
        line: "You either die a hero or you live long enough to see yourself become the villain.",
        icon: "",
    },
];

fn find(alias: &str) -> Option<&'static Character> {
    let alias = alias.to_lowercase();
    CHARACTERS.iter().find(|c| c.alias == alias)
}

/// Capitalizes the first letter of every word, `two-face` becomes `Two-Face`
pub fn title(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut start = true;
    for c in text.chars() {
        if start {
            titled.extend(c.to_uppercase());
        } else {
            titled.extend(c.to_lowercase());
        }
        start = !c.is_alphanumeric();
    }
    titled
}

/// Aliases stored in the Batcomputer, in storage order
pub fn aliases() -> impl Iterator<Item = &'static str> {
    CHARACTERS.iter().map(|c| c.alias)
}

/// Real identity of an alias, if it is known
pub fn alias_data(alias: &str) -> Option<String> {
    let character = find(alias)?;
    let data = format!("{} A.K.A. {} {}", character.name, title(character.alias), character.icon);
    Some(data.trim_end().to_string())
}

/// Identity plus the Oracle's notes on the alias
pub fn oracle_data(alias: &str) -> Option<String> {
    let character = find(alias)?;
    Some(format!(
        "{}\n  \"{}\"\n  Portrayed by {} in The Dark Knight (2008)",
        alias_data(alias)?,
        character.line,
        character.actor
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title() {
        assert_eq!(title("two-face"), "Two-Face");
        assert_eq!(title("PENGUIN"), "Penguin");
        assert_eq!(title("mr. freeze"), "Mr. Freeze");
    }

    #[test]
    fn test_alias_data() {
        assert_eq!(alias_data("Joker").unwrap(), "Jack Napier A.K.A. Joker \u{1f921}");
        assert_eq!(alias_data("two-face").unwrap(), "Harvey Dent A.K.A. Two-Face");
        assert_eq!(alias_data("penguin"), None);
    }

    #[test]
    fn test_oracle_data() {
        let data = oracle_data("joker").unwrap();
        assert!(data.contains("\"Why so serious?\""));
        assert!(data.ends_with("Portrayed by Heath Ledger in The Dark Knight (2008)"));
    }
}
