use crate::{cli::connect, cli::spinner, error, info, success};

pub async fn me() {
    let client = connect().await;

    let pb = spinner("Fetching profile...");
    let user = client.users().me().await;
    pb.finish_and_clear();

    match user {
        Ok(user) => {
            success!(
                "{} ({})",
                user.display_name.as_deref().unwrap_or(&user.id),
                user.uri
            );
            if let Some(product) = &user.product {
                info!("Subscription: {}", product);
            }
            if let Some(country) = &user.country {
                info!("Country: {}", country);
            }
            info!("Followers: {}", user.followers.total);
        }
        Err(e) => error!("Failed to fetch profile. Err: {}", e),
    }
}
