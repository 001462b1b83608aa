pub const SUPPLY_CHAIN_PROMPT: &str = r#"Act as a Supply Chain Intelligence Analyst. Investigate the supply network of: "{{TARGET}}".
Detect anomalies such as supplier insolvency signals, counterfeit components, route disruption, and demand shocks.
The response must be a single JSON object with:
{
    "risk_index": "0-100",
    "threat_level": "Low/Elevated/High/Severe",
    "anomalies": [
        {
            "id": "ANOM-001",
            "category": "Supplier/Logistics/Quality/Demand/Geopolitical",
            "severity": "Critical/High/Medium/Low",
            "tier": "1-4",
            "description": "Specific anomaly detail",
            "estimated_impact_days": "0-180",
            "mitigation": "Recommended corrective action"
        }
    ],
    "nodes": [
        {
            "name": "Supplier or facility name",
            "region": "Country or region",
            "health": "0-100"
        }
    ],
    "forecast": "One paragraph outlook for the next quarter"
}
Generate 6 anomalies and 8 nodes. Return ONLY JSON."#;
