use caster::{is_nil_error, wrap, Value};

fn main() {
    let config: Value = serde_json::from_str(
        r#"{"port": "8080", "verbose": "true", "retries": [1, "two", 3], "name": null}"#,
    )
    .unwrap();
    let Value::Map(config) = config else {
        panic!("config is not an object");
    };

    let port = caster::Caster::from_option(config.get("port"));
    dbg!(port.u16());
    dbg!(port.i8());

    dbg!(caster::Caster::from_option(config.get("verbose")).bool_safe(false));
    dbg!(caster::Caster::from_option(config.get("retries")).u32_slice(vec![5]));

    let name = caster::Caster::from_option(config.get("name"));
    if let Err(err) = name.string() {
        dbg!(is_nil_error(&err), err.to_string());
    }

    dbg!(wrap(&Value::from(200)).i8_safe(-1));
}
