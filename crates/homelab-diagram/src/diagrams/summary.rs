//! Summary edition: the home automation core, its databases and dashboards.

/// Mermaid source for the reduced home-lab flowchart.
///
/// Node identifiers, labels and edges are taken unchanged from
/// [`FULL_DIAGRAM`](super::FULL_DIAGRAM); only the peripheral bridges and the
/// container-management services are left out.
pub const SUMMARY_DIAGRAM: &str = r#"
flowchart TD
    %% Home Automation Core
    HA[Home Assistant]
    Z2M[Zigbee2MQTT<br>(Zigbee USB)]
    ZWave[Z-Wave JS<br>(Z-Wave USB)]
    Mosq[Mosquitto<br>MQTT Broker]

    %% Databases
    MariaDB[MariaDB<br>HA DB]
    Influx[InfluxDB<br>Metrics DB]

    %% Dashboards / Monitoring
    Grafana[Grafana<br>Dashboard]
    RedNode[RedNode<br>Flow Editor]
    Beszel[Beszel Hub + Agent]
    Homepage[Homepage Dashboard]
    Uptime[Uptime-Kuma<br>Alerts]
    IT[IT-Tools<br>Diagnostics]

    %% Connections: Devices -> MQTT
    Z2M -->|MQTT| Mosq
    ZWave -->|MQTT| Mosq
    HA -->|MQTT| Mosq

    %% Databases
    Mosq --> MariaDB
    Mosq --> Influx

    %% Dashboards / Automation
    MariaDB --> Grafana
    Influx --> Grafana
    Grafana --> Beszel
    Grafana --> RedNode
    RedNode --> Homepage
    Beszel --> Homepage
    Beszel --> Uptime
    Homepage --> IT

    %% Styling
    classDef db fill:#f9f,stroke:#333,stroke-width:1px;
    classDef dashboard fill:#9f9,stroke:#333,stroke-width:1px;
    class MariaDB,Influx db
    class Grafana,RedNode,Beszel,Homepage,Uptime,IT dashboard
"#;
