use officio::domain::TaskKind;

#[test]
fn given_each_task_kind_when_failing_then_uses_its_own_message() {
    assert_eq!(
        TaskKind::Summarize.failure_message(),
        "❌ Fehler bei der Text-Zusammenfassung."
    );
    assert_eq!(
        TaskKind::SummarizeFile.failure_message(),
        "❌ Fehler bei der Datei-Zusammenfassung."
    );
    assert_eq!(
        TaskKind::EmailReply.failure_message(),
        "❌ Fehler bei der E-Mail-Erstellung."
    );
    assert_eq!(
        TaskKind::Translate.failure_message(),
        "❌ Fehler bei der Übersetzung."
    );
}

#[test]
fn given_task_kind_when_displaying_then_uses_snake_case_name() {
    assert_eq!(TaskKind::SummarizeFile.to_string(), "summarize_file");
}
