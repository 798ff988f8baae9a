use crate::sql::base::error::ConnectorError;
use model::execution::connection::{ConnectionTarget, TransportMode};
use mysql_async::{OptsBuilder, Pool, PoolConstraints, PoolOpts, SslOpts, prelude::*};
use tracing::{error, info};

/// Connection options for `target`.
///
/// The pool is pinned to a single connection: a sync session issues one
/// statement at a time, so every query reuses the same server session.
pub fn build_opts(target: &ConnectionTarget) -> Result<OptsBuilder, ConnectorError> {
    let (host, port) = target
        .host_and_port()
        .map_err(ConnectorError::InvalidHost)?;
    let constraints = PoolConstraints::new(1, 1).unwrap_or_default();

    let builder = OptsBuilder::default()
        .ip_or_hostname(host)
        .tcp_port(port)
        .user(Some(target.username.clone()))
        .pass(Some(target.password.clone()))
        .db_name(Some(target.database.clone()))
        .pool_opts(PoolOpts::default().with_constraints(constraints));

    let builder = match target.transport {
        // internal hosts run on self-signed certificates
        TransportMode::Tls => {
            builder.ssl_opts(SslOpts::default().with_danger_accept_invalid_certs(true))
        }
        TransportMode::Plain => builder,
    };

    Ok(builder)
}

/// Opens a pool for `target` and checks the server answers before handing it out.
pub async fn connect(target: &ConnectionTarget) -> Result<Pool, ConnectorError> {
    info!("Connecting to MySQL at '{}'", target);

    let pool = Pool::new(build_opts(target)?);
    if let Err(e) = ping(&pool).await {
        error!("MySQL connection to '{}' failed: {}", target, e);
        pool.disconnect().await.ok();
        return Err(ConnectorError::MySql(e));
    }

    info!("MySQL connection to '{}' succeeded", target);
    Ok(pool)
}

pub async fn ping(pool: &Pool) -> Result<(), mysql_async::Error> {
    let mut conn = pool.get_conn().await?;
    conn.ping().await?;
    let _: Option<i32> = conn.query_first("SELECT 1").await?;
    Ok(())
}
