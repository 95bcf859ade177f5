//! Minimal walkthrough: a two-field record codec, round-tripped through text.
//!
//! Run with `cargo run --example point`.

use codecomb::{field, float, object2, Codec, DecodingError};

#[derive(Debug, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

fn point_codec() -> Codec<Point> {
    object2(
        field("x", float()),
        field("y", float()),
        |p: &Point| (p.x, p.y),
        |(x, y)| Ok(Point { x, y }),
    )
}

fn main() -> Result<(), DecodingError> {
    let codec = point_codec();

    let encoded = codec.encode_string(&Point { x: 1.0, y: 2.0 });
    println!("encoded: {encoded}");

    let decoded = codec.decode_string(&encoded)?;
    println!("decoded: {decoded:?}");

    // Structural problems come back as located error values.
    match codec.decode_string(r#"{"x": 1}"#) {
        Ok(point) => println!("unexpected success: {point:?}"),
        Err(err) => println!("as expected: {err}"),
    }
    match codec.decode_string(r#"{"x": 1, "y": "two"}"#) {
        Ok(point) => println!("unexpected success: {point:?}"),
        Err(err) => println!("as expected: {err}"),
    }

    Ok(())
}
