use crate::charts;
use crate::models::HospitalStats;
use crate::view::{PageState, Section};

const ANALYZE_LABEL: &str = "Process 22-Point Analysis";
const ANALYZE_BUSY_LABEL: &str = "Processing...";

/// Renders the dashboard page with the given view state baked in.
///
/// The browser script only toggles what is already in the document, so every
/// section, chart, and result slot is emitted here up front.
pub fn render_page(page: &PageState, stats: &HospitalStats, census_date: &str) -> String {
    let result = page.result.as_ref();
    let risk_value = result.map(|r| escape(&r.risk)).unwrap_or_else(|| "--".into());
    let ward_value = result.map(|r| escape(&r.ward)).unwrap_or_else(|| "--".into());
    let stay_value = result.map(|r| escape(&r.stay)).unwrap_or_else(|| "--".into());
    let risk_tone = result.map(|r| tone_for(&r.risk)).unwrap_or("");

    INDEX_HTML
        .replace(
            "{{NAV_DASHBOARD_ACTIVE}}",
            active_flag(page.is_active(Section::Dashboard)),
        )
        .replace(
            "{{NAV_NEW_PATIENT_ACTIVE}}",
            active_flag(page.is_active(Section::NewPatient)),
        )
        .replace(
            "{{DASHBOARD_ACTIVE}}",
            active_flag(page.is_active(Section::Dashboard)),
        )
        .replace(
            "{{NEW_PATIENT_ACTIVE}}",
            active_flag(page.is_active(Section::NewPatient)),
        )
        .replace(
            "{{RESULT_ACTIVE}}",
            active_flag(page.is_active(Section::PredictionResult)),
        )
        .replace("{{CENSUS_DATE}}", census_date)
        .replace("{{AVG_PULSE}}", &stats.avg_pulse.to_string())
        .replace("{{AVG_LOS}}", &stats.avg_los.to_string())
        .replace("{{OCCUPIED_BEDS}}", &stats.occupied_beds.to_string())
        .replace("{{VACANT_BEDS}}", &stats.vacant_beds.to_string())
        .replace("{{TOTAL_BEDS}}", &stats.total_beds.to_string())
        .replace("{{ADMISSIONS_CHART}}", &charts::admissions_line())
        .replace("{{BED_CHART}}", &charts::bed_occupancy_donut())
        .replace("{{RISK_CHART}}", &charts::risk_distribution_bar())
        .replace("{{RISK_TONE}}", risk_tone)
        .replace("{{RISK_VALUE}}", &risk_value)
        .replace("{{WARD_VALUE}}", &ward_value)
        .replace("{{STAY_VALUE}}", &stay_value)
        .replace(
            "{{ANALYZE_DISABLED}}",
            if page.analyzing { " disabled" } else { "" },
        )
        .replace(
            "{{ANALYZE_LABEL}}",
            if page.analyzing {
                ANALYZE_BUSY_LABEL
            } else {
                ANALYZE_LABEL
            },
        )
}

fn active_flag(active: bool) -> &'static str {
    if active { " active" } else { "" }
}

fn tone_for(risk: &str) -> &'static str {
    match risk {
        "CRITICAL" => "tone-danger",
        "ELEVATED" => "tone-warning",
        _ => "tone-success",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Triage Board</title>
  <style>
    :root {
      --bg: #f4f7fb;
      --ink: #1b2559;
      --muted: #707eae;
      --accent: #4318ff;
      --card: #ffffff;
      --line: #e0e5f2;
      --danger: #ff5b5c;
      --warning: #ffb547;
      --success: #05cd99;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
    }

    .layout {
      display: grid;
      grid-template-columns: 220px 1fr;
      min-height: 100vh;
    }

    .sidebar {
      background: var(--card);
      border-right: 1px solid var(--line);
      padding: 28px 18px;
      display: flex;
      flex-direction: column;
      gap: 24px;
    }

    .brand {
      font-size: 1.25rem;
      font-weight: 700;
      color: var(--accent);
    }

    .sidebar nav {
      display: grid;
      gap: 6px;
    }

    .nav-link {
      display: block;
      padding: 10px 14px;
      border-radius: 10px;
      color: var(--muted);
      text-decoration: none;
      font-weight: 600;
    }

    .nav-link.active {
      background: var(--accent);
      color: #fff;
    }

    .sidebar__note {
      margin-top: auto;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .content {
      padding: 32px;
      display: grid;
      gap: 24px;
      align-content: start;
    }

    .content-section {
      display: none;
    }

    .content-section.active {
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .value {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .chart-deck {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 16px;
    }

    .chart-card {
      margin: 0;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 16px;
    }

    .chart-card--wide {
      grid-column: 1 / -1;
    }

    .chart-card figcaption {
      font-weight: 600;
      margin-bottom: 8px;
    }

    .chart-card svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-area {
      fill: rgba(67, 24, 255, 0.05);
    }

    .chart-point {
      fill: #fff;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .donut-segment {
      fill: none;
      stroke-width: 34;
    }

    .table-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid var(--line);
    }

    th {
      color: var(--muted);
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    tr:last-child td {
      border-bottom: none;
    }

    #intake-form {
      display: grid;
      gap: 18px;
    }

    fieldset {
      border: 1px solid var(--line);
      border-radius: 16px;
      background: var(--card);
      padding: 18px;
      margin: 0;
    }

    legend {
      font-weight: 600;
      padding: 0 6px;
    }

    .field-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .field-grid label {
      display: grid;
      gap: 6px;
      font-size: 0.82rem;
      font-weight: 600;
      color: var(--muted);
    }

    input, select {
      padding: 9px 10px;
      border: 1px solid var(--line);
      border-radius: 10px;
      font-size: 0.95rem;
      color: var(--ink);
      background: #fff;
    }

    .intake-actions {
      display: flex;
      align-items: center;
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 26px;
      background: var(--accent);
      color: #fff;
      font-size: 0.95rem;
      font-weight: 700;
      letter-spacing: 0.04em;
      text-transform: uppercase;
      cursor: pointer;
    }

    button[disabled] {
      opacity: 0.6;
      cursor: wait;
    }

    .status {
      color: var(--muted);
      font-size: 0.9rem;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .result-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .result-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 22px;
      display: grid;
      gap: 8px;
      text-align: center;
    }

    .result-value {
      font-size: 1.5rem;
      font-weight: 700;
    }

    .tone-danger {
      color: var(--danger);
    }

    .tone-warning {
      color: var(--warning);
    }

    .tone-success {
      color: var(--success);
    }

    .result-back {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
    }

    @media (max-width: 860px) {
      .layout {
        grid-template-columns: 1fr;
      }
      .sidebar {
        flex-direction: row;
        align-items: center;
      }
      .sidebar__note {
        margin-top: 0;
        margin-left: auto;
      }
      .chart-deck {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <div class="layout">
    <aside class="sidebar">
      <div class="brand">Triage Board</div>
      <nav>
        <a class="nav-link{{NAV_DASHBOARD_ACTIVE}}" data-section="dashboard" href="/dashboard">Dashboard</a>
        <a class="nav-link{{NAV_NEW_PATIENT_ACTIVE}}" data-section="new-patient" href="/new-patient">New Patient</a>
      </nav>
      <p class="sidebar__note">Census as of {{CENSUS_DATE}}</p>
    </aside>
    <main class="content">
      <section class="content-section{{DASHBOARD_ACTIVE}}" id="dashboard">
        <h1>Ward overview</h1>
        <div class="stat-grid">
          <div class="stat">
            <span class="label">Average pulse</span>
            <span class="value">{{AVG_PULSE}}</span>
            <span class="meta">bpm across current stays</span>
          </div>
          <div class="stat">
            <span class="label">Average stay</span>
            <span class="value">{{AVG_LOS}}</span>
            <span class="meta">days per admission</span>
          </div>
          <div class="stat">
            <span class="label">Occupied beds</span>
            <span class="value">{{OCCUPIED_BEDS}}</span>
            <span class="meta">of {{TOTAL_BEDS}} total</span>
          </div>
          <div class="stat">
            <span class="label">Vacant beds</span>
            <span class="value">{{VACANT_BEDS}}</span>
            <span class="meta">ready for admission</span>
          </div>
        </div>
        <div class="chart-deck">
          <figure class="chart-card">
            <figcaption>Weekly admissions</figcaption>
            {{ADMISSIONS_CHART}}
          </figure>
          <figure class="chart-card">
            <figcaption>Bed occupancy</figcaption>
            {{BED_CHART}}
          </figure>
          <figure class="chart-card chart-card--wide">
            <figcaption>Patient risk distribution</figcaption>
            {{RISK_CHART}}
          </figure>
        </div>
        <div class="table-card">
          <h2>Recent patient flow</h2>
          <table>
            <thead>
              <tr><th>Patient</th><th>Ward</th><th>Condition</th><th>Risk</th></tr>
            </thead>
            <tbody>
              <tr><td>#101</td><td>ICU</td><td>Stable</td><td>Low</td></tr>
              <tr><td>#102</td><td>Surgery</td><td>Recovering</td><td>Medium</td></tr>
              <tr><td>#103</td><td>General</td><td>Observation</td><td>High</td></tr>
            </tbody>
          </table>
        </div>
      </section>

      <section class="content-section{{NEW_PATIENT_ACTIVE}}" id="new-patient">
        <h1>New patient intake</h1>
        <form id="intake-form">
          <fieldset>
            <legend>Vitals</legend>
            <div class="field-grid">
              <label>Age (years)
                <input type="number" step="any" data-group="vitals" data-field="age" />
              </label>
              <label>SpO2 (%)
                <input type="number" step="any" data-group="vitals" data-field="spo2" />
              </label>
              <label>Systolic BP (mmHg)
                <input type="number" step="any" data-group="vitals" data-field="sys_bp" />
              </label>
              <label>Diastolic BP (mmHg)
                <input type="number" step="any" data-group="vitals" data-field="dia_bp" />
              </label>
              <label>Heart rate (bpm)
                <input type="number" step="any" data-group="vitals" data-field="hr" />
              </label>
              <label>Resp. rate (breaths/min)
                <input type="number" step="any" data-group="vitals" data-field="rr" />
              </label>
              <label>Temperature (&deg;C)
                <input type="number" step="any" data-group="vitals" data-field="temp" />
              </label>
              <label>BMI
                <input type="number" step="any" data-group="vitals" data-field="bmi" />
              </label>
            </div>
          </fieldset>
          <fieldset>
            <legend>Labs</legend>
            <div class="field-grid">
              <label>Glucose (mg/dL)
                <input type="number" step="any" data-group="labs" data-field="glucose" />
              </label>
              <label>WBC (10^9/L)
                <input type="number" step="any" data-group="labs" data-field="wbc" />
              </label>
              <label>Hemoglobin (g/dL)
                <input type="number" step="any" data-group="labs" data-field="hb" />
              </label>
              <label>Creatinine (mg/dL)
                <input type="number" step="any" data-group="labs" data-field="creatinine" />
              </label>
              <label>Troponin (ng/mL)
                <input type="number" step="any" data-group="labs" data-field="troponin" />
              </label>
              <label>D-dimer (&micro;g/mL)
                <input type="number" step="any" data-group="labs" data-field="ddimer" />
              </label>
              <label>CRP (mg/L)
                <input type="number" step="any" data-group="labs" data-field="crp" />
              </label>
              <label>Platelets (10^9/L)
                <input type="number" step="any" data-group="labs" data-field="platelets" />
              </label>
            </div>
          </fieldset>
          <fieldset>
            <legend>Risk factors</legend>
            <div class="field-grid">
              <label>Glasgow Coma Scale (3-15)
                <input type="number" min="3" max="15" data-group="risks" data-field="gcs" />
              </label>
              <label>Pain score (0-10)
                <input type="number" min="0" max="10" data-group="risks" data-field="pain" />
              </label>
              <label>Supplemental oxygen
                <select data-group="risks" data-field="oxygen">
                  <option value="0">No</option>
                  <option value="1">Yes</option>
                </select>
              </label>
              <label>Diabetes
                <select data-group="risks" data-field="diabetes">
                  <option value="0">No</option>
                  <option value="1">Yes</option>
                </select>
              </label>
              <label>Hypertension
                <select data-group="risks" data-field="hypertension">
                  <option value="0">No</option>
                  <option value="1">Yes</option>
                </select>
              </label>
              <label>Previous admissions
                <input type="number" min="0" data-group="risks" data-field="prev_adm" />
              </label>
            </div>
          </fieldset>
          <div class="intake-actions">
            <button id="predict-btn" type="submit"{{ANALYZE_DISABLED}}>{{ANALYZE_LABEL}}</button>
            <span class="status" id="status"></span>
          </div>
        </form>
      </section>

      <section class="content-section{{RESULT_ACTIVE}}" id="prediction-result">
        <h1>Prediction result</h1>
        <div class="result-grid">
          <div class="result-card">
            <span class="label">Risk level</span>
            <span class="result-value {{RISK_TONE}}" id="risk-value">{{RISK_VALUE}}</span>
          </div>
          <div class="result-card">
            <span class="label">Recommended ward</span>
            <span class="result-value" id="ward-value">{{WARD_VALUE}}</span>
          </div>
          <div class="result-card">
            <span class="label">Estimated stay</span>
            <span class="result-value" id="stay-value">{{STAY_VALUE}}</span>
          </div>
        </div>
        <a class="result-back" data-section="new-patient" href="/new-patient">Run another analysis</a>
      </section>
    </main>
  </div>
  <script>
    const sections = Array.from(document.querySelectorAll('.content-section'));
    const navLinks = Array.from(document.querySelectorAll('[data-section]'));
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showSection = (id, link) => {
      const target = document.getElementById(id);
      if (!target || !target.classList.contains('content-section')) {
        return;
      }
      sections.forEach((section) => section.classList.remove('active'));
      navLinks.forEach((item) => item.classList.remove('active'));
      target.classList.add('active');
      if (link) {
        link.classList.add('active');
      }
    };

    navLinks.forEach((link) => {
      link.addEventListener('click', (event) => {
        event.preventDefault();
        showSection(link.dataset.section, link.closest('.sidebar') ? link : null);
      });
    });

    const collectSnapshot = () => {
      const snapshot = { vitals: {}, labs: {}, risks: {} };
      document.querySelectorAll('[data-group]').forEach((field) => {
        snapshot[field.dataset.group][field.dataset.field] = field.value;
      });
      return snapshot;
    };

    const riskTone = (risk) => {
      if (risk === 'CRITICAL') {
        return 'tone-danger';
      }
      if (risk === 'ELEVATED') {
        return 'tone-warning';
      }
      return 'tone-success';
    };

    const renderResult = (result) => {
      const riskEl = document.getElementById('risk-value');
      riskEl.textContent = result.risk;
      riskEl.className = 'result-value ' + riskTone(result.risk);
      document.getElementById('ward-value').textContent = result.ward;
      document.getElementById('stay-value').textContent = result.stay;
    };

    const analyze = async () => {
      const btn = document.getElementById('predict-btn');
      const idleLabel = btn.textContent;
      btn.disabled = true;
      btn.textContent = 'Processing...';
      setStatus('', '');
      try {
        const response = await fetch('/api/analyze', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(collectSnapshot())
        });
        if (!response.ok) {
          throw new Error('Analysis request failed (' + response.status + ')');
        }
        renderResult(await response.json());
        showSection('prediction-result', null);
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        btn.disabled = false;
        btn.textContent = idleLabel;
      }
    };

    document.getElementById('intake-form').addEventListener('submit', (event) => {
      event.preventDefault();
      analyze();
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prediction;
    use crate::stats::fallback_stats;

    fn render(page: &PageState) -> String {
        render_page(page, &fallback_stats(), "2026-08-23")
    }

    #[test]
    fn exactly_one_section_is_active() {
        let mut page = PageState::default();
        page.show_section(Some(Section::NewPatient));
        page.show_section(Some(Section::NewPatient));
        let html = render(&page);

        assert_eq!(html.matches(r#"class="content-section active""#).count(), 1);
        assert!(html.contains(r#"class="content-section active" id="new-patient""#));
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 1);
    }

    #[test]
    fn result_section_leaves_nav_unhighlighted() {
        let mut page = PageState::default();
        page.begin_analysis();
        page.finish_analysis(Prediction {
            risk: "CRITICAL".into(),
            ward: "ICU".into(),
            stay: "10+ Days".into(),
        });
        let html = render(&page);

        assert!(html.contains(r#"class="content-section active" id="prediction-result""#));
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 0);
        assert!(html.contains(r#"<span class="result-value tone-danger" id="risk-value">CRITICAL</span>"#));
        assert!(html.contains(r#"id="ward-value">ICU</span>"#));
        assert!(html.contains(r#"id="stay-value">10+ Days</span>"#));
    }

    #[test]
    fn result_slots_show_placeholders_before_any_analysis() {
        let html = render(&PageState::default());

        assert!(html.contains(r#"id="risk-value">--</span>"#));
        assert!(html.contains(r#"id="ward-value">--</span>"#));
        assert!(html.contains(r#"id="stay-value">--</span>"#));
        assert!(html.contains(">Process 22-Point Analysis</button>"));
    }

    #[test]
    fn analysis_in_flight_disables_the_trigger() {
        let mut page = PageState::default();
        page.begin_analysis();
        let html = render(&page);

        assert!(html.contains(r#"type="submit" disabled>Processing...</button>"#));
    }

    #[test]
    fn dashboard_embeds_stats_and_three_charts() {
        let html = render(&PageState::default());

        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains(">72.4<"));
        assert!(html.contains(">5.2<"));
        assert!(html.contains("Census as of 2026-08-23"));
    }

    #[test]
    fn intake_form_carries_all_twenty_two_fields() {
        let html = render(&PageState::default());

        assert_eq!(html.matches(r#"data-group="vitals""#).count(), 8);
        assert_eq!(html.matches(r#"data-group="labs""#).count(), 8);
        assert_eq!(html.matches(r#"data-group="risks""#).count(), 6);
        for field in ["spo2", "troponin", "ddimer", "gcs", "prev_adm"] {
            assert!(
                html.contains(&format!(r#"data-field="{field}""#)),
                "missing {field}"
            );
        }
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let mut page = PageState::default();
        page.finish_analysis(Prediction {
            risk: "STABLE".into(),
            ward: "Observation".into(),
            stay: "0-1 Day".into(),
        });

        assert!(!render(&page).contains("{{"));
        assert!(!render(&PageState::default()).contains("{{"));
    }

    #[test]
    fn rendered_results_are_html_escaped() {
        let mut page = PageState::default();
        page.finish_analysis(Prediction {
            risk: "<script>".into(),
            ward: "A&E".into(),
            stay: "1 Day".into(),
        });
        let html = render(&page);

        assert!(html.contains(r#"id="risk-value">&lt;script&gt;</span>"#));
        assert!(html.contains(r#"id="ward-value">A&amp;E</span>"#));
    }
}
