pub mod chatbot_controller;
pub mod prompt_controller;
pub mod weather_controller;
