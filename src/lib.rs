pub mod alarm;
pub mod audio;
pub mod calendar;
pub mod countdown;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod share;
pub mod storage;
pub mod tts;
pub mod wav_writer;
