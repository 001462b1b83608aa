pub const MONITORING_SESSION_PROMPT: &str = r#"Act as a Live Infrastructure Monitoring Console. Open a monitoring session for: "{{TARGET}}".
Simulate live telemetry captured over the last 60 minutes.
The response must be a single JSON object with:
{
    "session_id": "MON-XXXXXX (6 uppercase alphanumeric characters)",
    "status": "Nominal/Warning/Critical",
    "uptime_percent": "0-100 with two decimals",
    "telemetry": [
        {
            "timestamp": "HH:MM",
            "cpu_load": "0-100",
            "memory_usage": "0-100",
            "latency_ms": "1-2000",
            "error_rate": "0-100"
        }
    ],
    "alerts": [
        {
            "level": "Info/Warning/Critical",
            "source": "Subsystem that raised the alert",
            "message": "What was observed",
            "recommended_action": "Operator action"
        }
    ],
    "summary": "Two sentence assessment of the session"
}
Generate exactly 12 telemetry points at 5 minute intervals and 4 alerts. Return ONLY JSON."#;
