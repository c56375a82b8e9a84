use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Open-Meteo forecast API origin
    pub forecast_api: String,

    /// Open-Meteo geocoding API origin
    pub geocoding_api: String,

    /// BigDataCloud reverse-geocoding API origin
    pub reverse_geocode_api: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How many days of forecast to request
    pub forecast_days: u8,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Tooltip auto-dismiss delay on touch devices in milliseconds
    pub tooltip_dismiss_ms: u32,

    /// Location shown when geolocation is denied or unavailable
    pub fallback_name: String,
    pub fallback_country: String,
    pub fallback_latitude: f64,
    pub fallback_longitude: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            forecast_api: "https://api.open-meteo.com".to_string(),
            geocoding_api: "https://geocoding-api.open-meteo.com".to_string(),
            reverse_geocode_api: "https://api.bigdatacloud.net".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            forecast_days: 7,
            toast_duration_ms: 5000,
            tooltip_dismiss_ms: 3000,
            fallback_name: "New York".to_string(),
            fallback_country: "USA".to_string(),
            fallback_latitude: 40.71,
            fallback_longitude: -74.01,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        // Detect if running in development mode
        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Try to read from localStorage for custom settings
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(forecast_api)) = storage.get_item("skycast_forecast_api") {
                    settings.forecast_api = forecast_api;
                }

                if let Ok(Some(geocoding_api)) = storage.get_item("skycast_geocoding_api") {
                    settings.geocoding_api = geocoding_api;
                }

                if let Ok(Some(reverse_api)) = storage.get_item("skycast_reverse_geocode_api") {
                    settings.reverse_geocode_api = reverse_api;
                }

                if let Ok(Some(log_level)) = storage.get_item("skycast_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(days)) = storage.get_item("skycast_forecast_days") {
                    if let Ok(days_val) = days.parse::<u8>() {
                        settings.forecast_days = days_val;
                    }
                }

                if let Ok(Some(duration)) = storage.get_item("skycast_toast_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_val;
                    }
                }

                if let Ok(Some(dismiss)) = storage.get_item("skycast_tooltip_dismiss_ms") {
                    if let Ok(dismiss_val) = dismiss.parse::<u32>() {
                        settings.tooltip_dismiss_ms = dismiss_val;
                    }
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("skycast_forecast_api", &self.forecast_api)?;
                storage.set_item("skycast_geocoding_api", &self.geocoding_api)?;
                storage.set_item("skycast_reverse_geocode_api", &self.reverse_geocode_api)?;
                storage.set_item(
                    "skycast_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item("skycast_forecast_days", &self.forecast_days.to_string())?;
                storage.set_item(
                    "skycast_toast_duration_ms",
                    &self.toast_duration_ms.to_string(),
                )?;
                storage.set_item(
                    "skycast_tooltip_dismiss_ms",
                    &self.tooltip_dismiss_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
