use std::fmt::Write;

use anyhow::Result;

use gobgp_client::{DecodedRoute, GoBgpClient};

pub async fn show(endpoint: String, json: bool) -> Result<()> {
    let mut client = GoBgpClient::connect(endpoint).await?;
    let routes = client.get_rib().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    let mut buf = String::new();
    writeln!(
        buf,
        "{:20} {:16} {:>10} {:20} {}",
        "Prefix", "Next Hop", "MED", "AS Path", "Community"
    )
    .unwrap();
    for route in routes.iter() {
        writeln!(buf, "{}", format_route(route)).unwrap();
    }
    print!("{}", buf);

    Ok(())
}

fn format_route(route: &DecodedRoute) -> String {
    let next_hop = route.next_hop.as_deref().unwrap_or("-");
    let med = route
        .med
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    let as_path = route
        .as_path
        .as_ref()
        .map(|asns| {
            asns.iter()
                .map(|asn| asn.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .unwrap_or_else(|| "-".to_string());
    let community = route
        .community
        .as_ref()
        .map(|coms| coms.join(" "))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:20} {:16} {:>10} {:20} {}",
        route.prefix, next_hop, med, as_path, community
    )
}
