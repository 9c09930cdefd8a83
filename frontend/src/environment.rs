use const_format::formatcp;
use konst::eq_str;

pub enum RegistrationEnv {
    Staging,
    Local,
}

pub const fn reg_env(env: Option<&str>) -> RegistrationEnv {
    match env {
        Some(env) if eq_str(env, "local") => RegistrationEnv::Local,
        _ => RegistrationEnv::Staging,
    }
}

const BASE_API_STAGING: &str = "https://admin-staging.whydonate.dev";
const BASE_API_LOCAL: &str = "http://localhost:8090";

const fn base_api() -> &'static str {
    match option_env!("REG_API") {
        Some(api) => api,
        None => match reg_env(option_env!("REG_ENV")) {
            RegistrationEnv::Staging => BASE_API_STAGING,
            RegistrationEnv::Local => BASE_API_LOCAL,
        },
    }
}

pub const BASE_API: &str = base_api();
pub const REGISTRATION_API: &str = formatcp!("{}/whydonate/assignment", BASE_API);
