use raven::Api;

use crate::{CliError, commands::print_json};

pub(super) async fn run(api: &Api) -> Result<(), CliError> {
    print_json(&api.get_cart().await?)
}
