//! Embedded HTML dashboard.
//!
//! A single self-contained page, no build step and no external assets.
//! It polls `/api/status` every five seconds (paused while the tab is
//! hidden) and posts button clicks to the action endpoints. Everything it
//! enforces is cosmetic; the API accepts any action at any time.

use axum::response::Html;

/// `GET /` — serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Cat Feeder Dashboard</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .status-card {
            background: #f8f9fa;
            border: 1px solid #dee2e6;
            border-radius: 6px;
            padding: 15px;
            margin: 10px 0;
        }
        .status-title {
            font-weight: bold;
            color: #495057;
            margin-bottom: 8px;
        }
        .status-value {
            font-size: 1.2em;
            color: #212529;
        }
        .button {
            background-color: #007bff;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 4px;
            cursor: pointer;
            margin: 5px;
            font-size: 16px;
        }
        .button:hover { background-color: #0056b3; }
        .button:disabled {
            background-color: #6c757d;
            cursor: not-allowed;
        }
        .button.danger { background-color: #dc3545; }
        .button.danger:hover { background-color: #b02a37; }
        .warning { color: #dc3545; }
        .success { color: #28a745; }
        #status { margin-top: 20px; }
        .last-updated {
            font-size: 0.9em;
            color: #6c757d;
            text-align: center;
            margin-top: 15px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#128049; Cat Feeder Dashboard</h1>

        <div id="status">
            <div class="status-card">
                <div class="status-title">Cans Left</div>
                <div class="status-value" id="cans-left">Loading...</div>
            </div>

            <div class="status-card">
                <div class="status-title">Feed Mode</div>
                <div class="status-value" id="feed-mode">Loading...</div>
            </div>

            <div class="status-card">
                <div class="status-title">Next Feed Time</div>
                <div class="status-value" id="next-feed">Loading...</div>
            </div>

            <div class="status-card">
                <div class="status-title">Operation Status</div>
                <div class="status-value" id="operation-status">Loading...</div>
            </div>
        </div>

        <div style="text-align: center; margin-top: 20px;">
            <button class="button" onclick="sendAction('feed')" id="feed-btn">
                &#127869;&#65039; Manual Feed
            </button>
            <button class="button" onclick="sendAction('eject')" id="eject-btn">
                &#128229; Eject Can
            </button>
            <button class="button" onclick="refreshStatus()">
                &#128260; Refresh
            </button>
            <button class="button danger" onclick="sendAction('terminate')" id="terminate-btn">
                &#9211;&#65039; Terminate
            </button>
        </div>

        <div class="last-updated" id="last-updated"></div>

        <div id="message" style="margin-top: 15px; text-align: center;"></div>
    </div>

    <script>
        let autoRefresh = null;

        const actionMessages = {
            feed: 'Manual feed command sent!',
            eject: 'Eject command sent!',
            terminate: 'Terminate command sent!'
        };

        async function fetchStatus() {
            try {
                const response = await fetch('/api/status');
                if (!response.ok) {
                    const body = await response.json();
                    throw new Error(body.error || ('HTTP ' + response.status));
                }
                const data = await response.json();

                document.getElementById('cans-left').textContent = data.cans_left;
                document.getElementById('feed-mode').textContent = data.feed_mode;
                document.getElementById('next-feed').textContent = data.next_feed_time;

                const opStatus = document.getElementById('operation-status');
                if (data.operation_running) {
                    opStatus.textContent = 'RUNNING (' + data.machine_state + ')';
                    opStatus.className = 'status-value warning';
                } else {
                    opStatus.textContent = 'IDLE';
                    opStatus.className = 'status-value success';
                }

                // Cosmetic guard only: terminate stays available even while busy.
                document.getElementById('feed-btn').disabled = data.operation_running;
                document.getElementById('eject-btn').disabled = data.operation_running;

                document.getElementById('last-updated').textContent =
                    'Last updated: ' + new Date().toLocaleTimeString();

                clearMessage();

            } catch (error) {
                showMessage('Error fetching status: ' + error.message, 'warning');
                console.error('Error:', error);
            }
        }

        async function sendAction(action) {
            const btn = document.getElementById(action + '-btn');
            btn.disabled = true;

            try {
                const response = await fetch('/api/' + action, { method: 'POST' });
                const data = await response.json();

                if (response.ok && data.success) {
                    showMessage(actionMessages[action], 'success');
                    // Refresh status after a short delay
                    setTimeout(fetchStatus, 1000);
                } else {
                    showMessage('Failed to send ' + action + ' command', 'warning');
                }
            } catch (error) {
                showMessage('Error: ' + error.message, 'warning');
                console.error('Error:', error);
            } finally {
                setTimeout(() => { btn.disabled = false; }, 2000);
            }
        }

        function refreshStatus() {
            fetchStatus();
        }

        function showMessage(text, type) {
            const messageDiv = document.getElementById('message');
            messageDiv.textContent = text;
            messageDiv.className = type;
        }

        function clearMessage() {
            const messageDiv = document.getElementById('message');
            messageDiv.textContent = '';
            messageDiv.className = '';
        }

        // Auto-refresh every 5 seconds
        function startAutoRefresh() {
            autoRefresh = setInterval(fetchStatus, 5000);
        }

        function stopAutoRefresh() {
            if (autoRefresh) {
                clearInterval(autoRefresh);
                autoRefresh = null;
            }
        }

        // Initial load and start auto-refresh
        fetchStatus();
        startAutoRefresh();

        // Pause polling while the page is hidden, resume on return.
        document.addEventListener('visibilitychange', function() {
            if (document.hidden) {
                stopAutoRefresh();
            } else {
                startAutoRefresh();
            }
        });
    </script>
</body>
</html>
"#;
