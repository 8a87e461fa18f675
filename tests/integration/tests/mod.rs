mod logging;
mod relay_api;
mod relay_scenarios;
