use super::scanner::scan;
use super::{ALTERNATIVE_SEPARATOR, FAMILY_SEPARATOR, SIDE_SEPARATOR};
use crate::types::{Card, Family, Order, Vocabulary};

/// Parse one Ding line into a card.
///
/// Only the first `::` separates head and translation, later ones stay in
/// the translation text. A line without translation gets a single empty
/// placeholder on the back.
pub fn parse_line(line: &str) -> Card {
    let (head, translation) = match line.split_once(SIDE_SEPARATOR) {
        Some((head, translation)) => (head, Some(translation)),
        None => (line, None),
    };

    Card {
        front: parse_order(head),
        back: parse_translation(translation),
    }
}

pub fn parse_order(order: &str) -> Order {
    order.split(FAMILY_SEPARATOR).map(parse_family).collect()
}

pub fn parse_family(family: &str) -> Family {
    family.split(ALTERNATIVE_SEPARATOR).map(scan).collect()
}

/// Translation text is kept verbatim per family, it is never field-scanned.
pub fn parse_translation(translation: Option<&str>) -> Order {
    match translation {
        Some(text) if !text.is_empty() => text
            .split(FAMILY_SEPARATOR)
            .map(|family| vec![Vocabulary::plain(family.trim())])
            .collect(),
        _ => vec![vec![Vocabulary::plain("")]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fragment;

    fn orthographies(order: &Order) -> Vec<Vec<&str>> {
        order
            .iter()
            .map(|f| f.iter().map(|v| v.orthography.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn parses_family_alternatives() {
        let family = parse_family("(durch die Luft) rauschen; (in der Luft) rascheln; surren {vi} ");

        assert_eq!(family.len(), 3);
        assert_eq!(family[0].orthography, Fragment::new(16, "rauschen"));
        assert_eq!(family[0].extension, vec![Fragment::new(0, "durch die Luft")]);
        assert_eq!(family[1].orthography, Fragment::new(13, "rascheln"));
        assert_eq!(family[1].extension, vec![Fragment::new(0, "in der Luft")]);
        assert_eq!(family[2].orthography, Fragment::new(0, "surren"));
        assert_eq!(family[2].part_of_speech, Some(Fragment::new(7, "vi")));
    }

    #[test]
    fn positions_restart_per_alternative() {
        let family = parse_family("Schneeräumfahrzeug {n}; Räumfahrzeug {n} (Winterdienst) [auto]");

        assert_eq!(family[0].part_of_speech, Some(Fragment::new(19, "n")));
        assert_eq!(family[1].orthography, Fragment::new(0, "Räumfahrzeug"));
        assert_eq!(family[1].part_of_speech, Some(Fragment::new(13, "n")));
        assert_eq!(family[1].extension, vec![Fragment::new(17, "Winterdienst")]);
        assert_eq!(family[1].domain, vec![Fragment::new(32, "auto")]);
    }

    #[test]
    fn parses_order_of_families() {
        let order = parse_order("mauken; wintern {vi} | maukend; winternd | gemaukt; gewintert");

        assert_eq!(
            orthographies(&order),
            vec![
                vec!["mauken", "wintern"],
                vec!["maukend", "winternd"],
                vec!["gemaukt", "gewintert"],
            ]
        );
        assert_eq!(order[0][1].part_of_speech, Some(Fragment::new(8, "vi")));
    }

    #[test]
    fn separator_counts_match_structure() {
        let head = "a; b; c | d | e; f";
        let order = parse_order(head);

        assert_eq!(order.len(), head.matches(FAMILY_SEPARATOR).count() + 1);
        let alternatives: usize = order.iter().map(Vec::len).sum();
        assert_eq!(
            alternatives,
            head.matches(ALTERNATIVE_SEPARATOR).count() + order.len()
        );
    }

    #[test]
    fn parses_full_line() {
        let card = parse_line("Winter {m} | Winter {pl} :: winter | winters");

        assert_eq!(orthographies(&card.front), vec![vec!["Winter"], vec!["Winter"]]);
        assert_eq!(card.front[1][0].part_of_speech_text(), Some("pl"));
        assert_eq!(orthographies(&card.back), vec![vec!["winter"], vec!["winters"]]);
        assert_eq!(card.back[0][0].orthography.position, Some(0));
    }

    #[test]
    fn translation_is_not_scanned() {
        let card = parse_line("folgen :: to follow sth. (of a thing); to succeed [formal]");

        assert_eq!(card.back.len(), 1);
        assert_eq!(card.back[0].len(), 1);
        let back = &card.back[0][0];
        assert_eq!(back.orthography.text, "to follow sth. (of a thing); to succeed [formal]");
        assert!(back.extension.is_empty());
        assert!(back.domain.is_empty());
    }

    #[test]
    fn missing_translation_yields_placeholder() {
        for line in ["Winter {m}", "Winter {m} ::"] {
            let card = parse_line(line);
            assert_eq!(card.back, vec![vec![Vocabulary::plain("")]], "line {line:?}");
            assert_eq!(card.front[0][0].orthography.text, "Winter");
        }
    }

    #[test]
    fn only_first_double_colon_splits() {
        let card = parse_line("a :: b :: c");

        assert_eq!(card.front[0][0].orthography.text, "a");
        assert_eq!(card.back[0][0].orthography.text, "b :: c");
    }
}
