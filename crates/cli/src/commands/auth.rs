//! `login`, `register`, `logout` and `whoami`

use pedidos_api::client::{LOGIN_FAILED, REGISTER_FAILED};
use pedidos_core::{LoginForm, RegisterForm};
use tracing::{error, info};

use super::{CliContext, fail};
use crate::output;

pub async fn login(ctx: &CliContext, email: String, password: String) -> anyhow::Result<()> {
    let user = ctx
        .client
        .login(&LoginForm::new(email, password))
        .await
        .map_err(|e| fail(e, LOGIN_FAILED))?;

    // A session that cannot be stored still counts as a successful login
    if let Err(e) = ctx.session.set(user.clone()) {
        error!("Failed to persist session: {}", e);
    }
    info!("Operator logged in");

    if ctx.json {
        return ctx.print_json(&user);
    }
    output::success(format!("Bienvenido, {}", user.display_name()));
    Ok(())
}

pub async fn register(
    ctx: &CliContext,
    nombre: String,
    email: String,
    password: String,
    confirm_password: String,
) -> anyhow::Result<()> {
    let form = RegisterForm {
        nombre,
        email,
        password,
        confirm_password,
    };
    let user = ctx
        .client
        .register(&form)
        .await
        .map_err(|e| fail(e, REGISTER_FAILED))?;

    if ctx.json {
        return ctx.print_json(&user);
    }
    output::success("¡Usuario registrado exitosamente!");
    output::note(format!(
        "Bienvenido {}. Ahora puedes iniciar sesión con tu email: {}",
        user.nombre.as_deref().unwrap_or_default(),
        user.email
    ));
    Ok(())
}

pub fn logout(ctx: &CliContext) -> anyhow::Result<()> {
    ctx.session.clear()?;
    output::success("Sesión cerrada");
    Ok(())
}

pub fn whoami(ctx: &CliContext) -> anyhow::Result<()> {
    let user = ctx.require_session()?;

    if ctx.json {
        return ctx.print_json(&user);
    }
    println!("{}", user.display_name());
    if user.display_name() != user.email {
        println!("{}", user.email);
    }
    Ok(())
}
