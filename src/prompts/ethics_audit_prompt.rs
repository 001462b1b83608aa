pub const ETHICS_AUDIT_PROMPT: &str = r#"Act as an AI Ethics & Security Guard. Audit the system: "{{TARGET}}".
Detect ethical violations including Bias Drift, Fairness Degradation, and Privacy Leakage.
Provide a hyper-detailed JSON report for a "Real-Time Ethical Risk Monitor" dashboard.
The response must be a single JSON object with:
{
    "overall_integrity": "0-100",
    "risk_status": "Healthy/Degraded/Critical",
    "violations": [
        {
            "type": "Bias Drift/Privacy Leakage/Fairness Degradation",
            "severity": "Critical/High/Medium/Low",
            "component": "Dataset/Model Weights/API Endpoint",
            "description": "Specific detection detail",
            "mitigation": "Recommended corrective action"
        }
    ],
    "metrics": {
        "bias_score": "0-100",
        "fairness_level": "0-100",
        "privacy_integrity": "0-100"
    },
    "visual_prompt": "Futuristic clean digital dashboard monitoring neural networks, ethical shield icon, neon blue and orange"
}
Generate 5 significant violations. Return ONLY JSON."#;
