//! Embedded prediction page
//!
//! Served on `GET /`. The page populates its model selector from
//! `/api/models` and submits the form to `/api/predict`, so the binary is
//! fully self-contained with no asset directory to ship.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sentiview</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-white min-h-screen">
    <div class="container mx-auto px-4 py-8 max-w-2xl">
        <header class="mb-8">
            <h1 class="text-4xl font-bold text-blue-400">Sentiview</h1>
            <p class="text-gray-400 mt-2">Sentiment analysis via hosted inference</p>
        </header>

        <form id="predict-form" class="bg-gray-800 rounded-lg p-6 space-y-4">
            <div>
                <label for="model" class="block text-sm text-gray-400 mb-2">Model</label>
                <select id="model" name="model_choice"
                        class="w-full bg-gray-700 rounded px-3 py-2">
                    <option disabled selected>Loading models...</option>
                </select>
            </div>
            <div>
                <label for="message" class="block text-sm text-gray-400 mb-2">Your text</label>
                <textarea id="message" name="message" rows="4" required
                          placeholder="Type something to analyze..."
                          class="w-full bg-gray-700 rounded px-3 py-2"></textarea>
            </div>
            <button type="submit" id="submit-btn"
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
                Analyze
            </button>
        </form>

        <div id="result" class="hidden mt-6 bg-gray-800 rounded-lg p-6">
            <h2 class="text-xl font-semibold mb-2">Result</h2>
            <p id="result-text" class="text-gray-300"></p>
        </div>

        <div id="error" class="hidden mt-6 bg-red-900/50 border border-red-700 rounded-lg p-6">
            <p id="error-text" class="text-red-300"></p>
        </div>
    </div>

    <script>
        const form = document.getElementById('predict-form');
        const select = document.getElementById('model');
        const resultPanel = document.getElementById('result');
        const errorPanel = document.getElementById('error');

        async function loadModels() {
            try {
                const response = await fetch('/api/models');
                const data = await response.json();
                select.innerHTML = '';
                for (const name of data.models) {
                    const option = document.createElement('option');
                    option.value = name;
                    option.textContent = name;
                    select.appendChild(option);
                }
            } catch (err) {
                showError('Failed to load the model list: ' + err.message);
            }
        }

        function showError(message) {
            resultPanel.classList.add('hidden');
            errorPanel.classList.remove('hidden');
            document.getElementById('error-text').textContent = message;
        }

        function showResult(label, score) {
            errorPanel.classList.add('hidden');
            resultPanel.classList.remove('hidden');
            document.getElementById('result-text').textContent =
                `The feeling of this text is ${label} with probability of ${(score * 100).toFixed(2)}%.`;
        }

        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            const button = document.getElementById('submit-btn');
            button.disabled = true;
            button.textContent = 'Analyzing...';

            try {
                const body = new URLSearchParams({
                    message: document.getElementById('message').value,
                    model_choice: select.value
                });
                const response = await fetch('/api/predict', { method: 'POST', body });
                const data = await response.json();

                if (response.ok) {
                    showResult(data.label, data.score);
                } else {
                    showError(data.error?.message || 'Prediction failed, please try again.');
                }
            } catch (err) {
                showError('Prediction failed: ' + err.message);
            } finally {
                button.disabled = false;
                button.textContent = 'Analyze';
            }
        });

        loadModels();
    </script>
</body>
</html>
"#;
