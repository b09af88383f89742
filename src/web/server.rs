use rocket::{Build, Rocket};

use crate::tools::env_vars::retrieve_env_var;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;

const PORT_ENV_VAR: &str = "PORT";
const DEFAULT_PORT: i32 = 8000;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build = rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new()),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| {
            server.configure(rocket_build)
        })
}

fn get_port() -> i32 {
    retrieve_env_var(PORT_ENV_VAR)
        .map(|port| port.parse::<i32>().ok())
        .unwrap_or(None)
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use crate::tools::env_vars::with_env_vars;
    use crate::web::server::{DEFAULT_PORT, PORT_ENV_VAR, get_port};

    #[test]
    fn should_get_custom_port() {
        let expected_port = 10;
        let port = with_env_vars(
            vec![(PORT_ENV_VAR, expected_port.to_string().as_str())],
            get_port,
        );

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_get_default_port_when_wrong_type() {
        let port = with_env_vars(vec![(PORT_ENV_VAR, "doe")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_value() {
        let port = with_env_vars(vec![(PORT_ENV_VAR, "")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_var() {
        let port = with_env_vars(vec![], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }
}
