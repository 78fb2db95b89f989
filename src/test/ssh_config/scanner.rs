use super::{ScannedLine, scan_line};

fn directive(keyword: &str, fields: &[&str]) -> ScannedLine {
    ScannedLine::Directive {
        keyword: keyword.to_string(),
        fields: fields.iter().map(|field| field.to_string()).collect(),
    }
}

#[test]
fn ignores_blank_and_comment_lines() {
    assert_eq!(scan_line(""), ScannedLine::Ignore);
    assert_eq!(scan_line("   \t "), ScannedLine::Ignore);
    assert_eq!(scan_line("# comment"), ScannedLine::Ignore);
    assert_eq!(scan_line("    #indented comment"), ScannedLine::Ignore);
}

#[test]
fn lowercases_keyword_and_splits_fields_on_whitespace() {
    assert_eq!(scan_line("  HostName   10.0.0.1  "), directive("hostname", &["10.0.0.1"]));
    assert_eq!(scan_line("Host web  db\tcache"), directive("host", &["web", "db", "cache"]));
    assert_eq!(scan_line("Host"), directive("host", &[]));
}

#[test]
fn value_rejoins_fields_with_single_spaces() {
    let fields = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(ScannedLine::value(&fields), "a b c");
    assert_eq!(ScannedLine::value(&[]), "");
}

#[test]
fn accepts_equals_separated_directives() {
    assert_eq!(scan_line("Port=2222"), directive("port", &["2222"]));
    assert_eq!(scan_line("Port= 2222"), directive("port", &["2222"]));
    assert_eq!(scan_line("Port = 2222"), directive("port", &["2222"]));
    assert_eq!(scan_line("Port =2222"), directive("port", &["2222"]));
    assert_eq!(scan_line("=value"), ScannedLine::Ignore);
}
