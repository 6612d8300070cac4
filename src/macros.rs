#[macro_export]
macro_rules! ini {
    // Handle null
    (null) => {
        $crate::IniValue::Null
    };

    // Handle true
    (true) => {
        $crate::IniValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::IniValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::IniValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::IniValue::Array(vec![$($crate::ini!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::IniValue::Object($crate::IniMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::IniMap::new();
        $(
            object.insert($key.to_string(), $crate::ini!($value));
        )*
        $crate::IniValue::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::IniValue::Null)
    }};
}
