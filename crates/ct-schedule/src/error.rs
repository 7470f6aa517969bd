use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid weekly slot: weekday {weekday} (0-6), hour {hour} (0-23)")]
    InvalidSlot { weekday: u8, hour: u8 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
