use better_term::Color;

#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub enum Level {
    Say,
    Hey,
    Yay,
    Nay,
}

#[doc(hidden)]
pub fn log(level: Level, msg: String) {
    let (tag, color) = match level {
        Level::Say => ("*", Color::White),
        Level::Hey => ("!", Color::Yellow),
        Level::Yay => ("+", Color::BrightGreen),
        Level::Nay => ("-", Color::BrightRed),
    };
    println!(
        "{}{} {}[{}] {}{}",
        Color::BrightBlack,
        chrono::Local::now().format("%H:%M:%S"),
        color,
        tag,
        Color::White,
        msg
    );
}

/// general information
#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Say, format!($($arg)*))
    };
}

/// warnings
#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Hey, format!($($arg)*))
    };
}

/// successes
#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Yay, format!($($arg)*))
    };
}

/// errors
#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::Level::Nay, format!($($arg)*))
    };
}
