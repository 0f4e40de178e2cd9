/// Centres `message` in a line of `width` columns filled with `pad`.
///
/// The message gets one space either side, an odd remainder goes to the left.
/// Messages wider than `width` are returned unpadded.
pub fn pad_center(message: &str, width: usize, pad: char) -> String {
    let message = format!(" {message} ");
    let length = message.chars().count();

    if length >= width {
        return message;
    }

    let right = (width - length) / 2;
    let left = width - length - right;
    let fill = |count: usize| pad.to_string().repeat(count);

    format!("{}{}{}", fill(left), message, fill(right))
}

pub trait OptionStr<T> {
    fn map_empty_to_none(self) -> Option<T>;
}

impl OptionStr<String> for Option<String> {
    fn map_empty_to_none(self) -> Option<String> {
        match self {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => None,
        }
    }
}
