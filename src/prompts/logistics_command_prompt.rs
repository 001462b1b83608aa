pub const LOGISTICS_COMMAND_PROMPT: &str = r#"Act as a Logistics Command Center. Track the shipment: "{{TARGET}}".
Produce a live operational picture for a command center wall display.
The response must be a single JSON object with:
{
    "shipment_status": "In Transit/Delayed/Held at Customs/Delivered",
    "eta_hours": "0-720",
    "route": {
        "origin": "City, Country",
        "destination": "City, Country",
        "mode": "Sea/Air/Rail/Road",
        "distance_km": "positive integer"
    },
    "checkpoints": [
        {
            "location": "City, Country",
            "status": "Cleared/Pending/Flagged",
            "timestamp": "ISO 8601",
            "note": "Short operational note"
        }
    ],
    "alerts": [
        {
            "severity": "Critical/High/Medium/Low",
            "message": "Condition affecting the shipment",
            "action": "Recommended dispatcher action"
        }
    ],
    "environment": {
        "temperature_c": "-30 to 50",
        "humidity_percent": "0-100",
        "shock_events": "0-20"
    }
}
Generate 5 checkpoints and 3 alerts. Return ONLY JSON."#;
