use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use tracing::info;

use crate::config::AmazonConfig;
use crate::error::AppError;

const SIGNIN_URL: &str = "https://www.amazon.com/ap/signin";

const EMAIL_FIELD: Locator<'static> = Locator::Id("ap_email");
const PASSWORD_FIELD: Locator<'static> = Locator::Id("ap_password");
const SUBMIT_BUTTON: Locator<'static> = Locator::Id("signInSubmit");
// The cart badge only renders for a signed-in session.
const POST_LOGIN_MARKER: Locator<'static> = Locator::Id("nav-cart-count");

pub async fn automated_login(
    client: &Client,
    credentials: &AmazonConfig,
    timeout: Duration,
) -> Result<(), AppError> {
    client.goto(SIGNIN_URL).await?;

    let email_field = wait_for(client, EMAIL_FIELD, timeout).await?;
    let password_field = wait_for(client, PASSWORD_FIELD, timeout).await?;

    email_field.send_keys(&credentials.email).await?;
    password_field.send_keys(&credentials.password).await?;

    wait_for(client, SUBMIT_BUTTON, timeout).await?.click().await?;

    match client
        .wait()
        .at_most(timeout)
        .for_element(POST_LOGIN_MARKER)
        .await
    {
        Ok(_) => {
            info!("Login successful");
            Ok(())
        }
        Err(CmdError::WaitTimeout) => Err(AppError::AuthError(
            "post-login marker did not appear within the wait window".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

async fn wait_for(
    client: &Client,
    locator: Locator<'static>,
    timeout: Duration,
) -> Result<Element, AppError> {
    client
        .wait()
        .at_most(timeout)
        .for_element(locator)
        .await
        .map_err(Into::into)
}
