use vetbot::{
    ChatSession, ClinicSettings, DestinationKind, ReplyOption, TurnRole,
    intent_keys,
};

fn clinic_settings() -> ClinicSettings {
    ClinicSettings::default()
        .with_phone_display("(0216) 444 00 00")
        .with_phone_dial("+902164440000")
        .with_whatsapp("+90 544 123-45-67")
        .with_email("klinik@example.com")
}

#[test]
fn test_emergency_exchange_end_to_end() {
    let mut session = ChatSession::new(&clinic_settings());
    assert_eq!(session.turns().len(), 1);

    let reply = session.submit_text("Acil! Köpeğim zehirlenmiş olabilir");
    assert!(reply.urgent);
    assert!(reply.text.contains("(0216) 444 00 00"));

    let call = reply
        .options
        .iter()
        .find_map(|option| match option {
            ReplyOption::Navigate { destination, .. }
                if DestinationKind::of(destination)
                    == DestinationKind::Phone =>
            {
                Some(destination.clone())
            }
            _ => None,
        })
        .expect("the emergency reply offers a call option");
    assert_eq!(call, "tel:+902164440000");
}

#[test]
fn test_guided_navigation_through_options() {
    let mut session = ChatSession::new(&clinic_settings());

    // Type nonsense, get guided back via the fallback options.
    let reply = session.submit_text("xyzzy plugh").clone();
    assert!(!reply.urgent);
    assert!(!reply.options.is_empty());

    let (label, intent) = reply
        .options
        .iter()
        .find_map(|option| match option {
            ReplyOption::Invoke { label, intent }
                if intent == intent_keys::APPOINTMENT =>
            {
                Some((label.clone(), intent.clone()))
            }
            _ => None,
        })
        .expect("the fallback reply offers the appointment intent");

    let booked = session.select_intent(&label, &intent);
    assert_eq!(booked.role, TurnRole::Assistant);
    assert!(
        booked
            .options
            .iter()
            .any(|option| matches!(
                option,
                ReplyOption::Navigate { destination, .. }
                    if destination == "/randevu"
            ))
    );

    // greeting + 2 exchanges
    assert_eq!(session.turns().len(), 5);
}

#[test]
fn test_reset_clears_history() {
    let mut session = ChatSession::new(&clinic_settings());
    session.submit_text("merhaba");
    session.submit_text("fiyat listesi");
    session.reset();

    let turns = session.turns();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, TurnRole::Assistant);
    assert_eq!(turns[0].text, session.table().greeting().message);
}
