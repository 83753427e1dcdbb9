use serde_json::Value;

/// Integer argument `key` from a method call's argument map.
///
/// The host codec may send either an int32 or an int64; both arrive as JSON
/// integers and int64 values saturate into `i32`. Anything that is not an
/// integer counts as missing.
pub fn int_arg(arguments: &Value, key: &str) -> Option<i32> {
    let value = arguments.as_object()?.get(key)?.as_i64()?;
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
