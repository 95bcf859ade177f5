//! Tagged-union codec: a discriminant key plus a self-placed payload field,
//! so the tag and the payload live side by side in one flat JSON object.
//!
//! Run with `cargo run --example tagged_union`.

use codecomb::{
    defaulted, field, float, object1, object2, self_field, string, Codec, DecodingError, Location,
};

#[derive(Debug, PartialEq, Clone)]
enum Event {
    Tick { delta: f64 },
    Message { text: String, channel: String },
}

fn tick_codec() -> Codec<Event> {
    object1(
        field("delta", float()),
        |event: &Event| match event {
            Event::Tick { delta } => (*delta,),
            other => unreachable!("tag dispatch sent {other:?} to the tick codec"),
        },
        |(delta,)| Ok(Event::Tick { delta }),
    )
}

fn message_codec() -> Codec<Event> {
    object2(
        field("text", string()),
        defaulted(field("channel", string()), "general".to_string()),
        |event: &Event| match event {
            Event::Message { text, channel } => (text.clone(), channel.clone()),
            other => unreachable!("tag dispatch sent {other:?} to the message codec"),
        },
        |(text, channel)| Ok(Event::Message { text, channel }),
    )
}

fn event_codec() -> Codec<Event> {
    object2(
        field("kind", string()),
        self_field(),
        |event: &Event| match event {
            Event::Tick { .. } => ("tick".to_string(), tick_codec().encode(event)),
            Event::Message { .. } => ("message".to_string(), message_codec().encode(event)),
        },
        |(kind, payload)| match kind.as_str() {
            "tick" => tick_codec().decode(&payload),
            "message" => message_codec().decode(&payload),
            other => Err(DecodingError::UnexpectedJsonValue {
                location: Location::root(),
                repr: format!("\"{other}\""),
            }),
        },
    )
}

fn main() -> Result<(), DecodingError> {
    let codec = event_codec();

    for event in [
        Event::Tick { delta: 0.016 },
        Event::Message {
            text: "hello".to_string(),
            channel: "ops".to_string(),
        },
    ] {
        let encoded = codec.encode_string(&event);
        println!("{event:?}\n  -> {encoded}");
        assert_eq!(codec.decode_string(&encoded)?, event);
    }

    // The defaulted "channel" kicks in when the wire omits it.
    let terse = codec.decode_string(r#"{"kind":"message","text":"hi"}"#)?;
    println!("defaulted: {terse:?}");

    // Unknown tags are value errors with the tag's rendering.
    match codec.decode_string(r#"{"kind":"zap"}"#) {
        Ok(event) => println!("unexpected success: {event:?}"),
        Err(err) => println!("as expected: {err}"),
    }

    Ok(())
}
