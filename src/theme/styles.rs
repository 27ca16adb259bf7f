//! Global CSS styles for the portfolio shell.
//!
//! One stylesheet, two themes: the `.cybersecurity-theme` class on the
//! app root flips the accent variables from AI blues to terminal reds.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BASE (Backgrounds) */
  --base-black: #05060a;
  --base-panel: #0b0e16;
  --base-border: #1a2030;

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
  --transition-reveal: 800ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* AI Engineer accents (default theme) */
.app-root {
  --accent: #0080ff;
  --accent-deep: #0040ff;
  --accent-glow: rgba(0, 128, 255, 0.4);
  --accent-soft: rgba(0, 128, 255, 0.15);
  --indicator: #00ff7f;
}

/* Cybersecurity accents */
.app-root.cybersecurity-theme {
  --accent: #ff0000;
  --accent-deep: #cc1414;
  --accent-glow: rgba(255, 0, 0, 0.4);
  --accent-soft: rgba(255, 0, 0, 0.12);
  --indicator: #00ff00;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--base-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.app-root {
  min-height: 100vh;
  transition: background var(--transition-slow);
}

.cybersecurity-theme {
  font-family: var(--font-mono);
}

/* === Typography === */
.page-title {
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--accent);
  text-shadow: 0 0 30px var(--accent-glow);
  letter-spacing: 0.05em;
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 500;
  color: var(--accent);
  margin-bottom: 1rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  line-height: 1.7;
}

/* === Welcome screen === */
.welcome-screen {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  background: radial-gradient(ellipse at top, var(--base-panel), var(--base-black));
  z-index: 100;
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.welcome-screen.transitioning {
  opacity: 0;
  transform: scale(1.04);
  pointer-events: none;
}

.theme-indicators {
  display: flex;
  gap: 2rem;
}

.theme-indicator {
  width: 220px;
  padding: 1.5rem;
  border: 1px solid var(--base-border);
  border-radius: 14px;
  background: var(--base-panel);
  cursor: pointer;
  text-align: center;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.theme-indicator:hover {
  transform: translateY(-6px);
}

.theme-indicator.ai:hover {
  box-shadow: 0 20px 40px rgba(0, 128, 255, 0.4);
}

.theme-indicator.cyber:hover {
  box-shadow: 0 20px 40px rgba(255, 0, 0, 0.4);
}

.indicator-icon {
  font-size: 2.5rem;
}

.indicator-name {
  font-size: var(--text-lg);
  margin-top: 0.5rem;
}

.btn-enter {
  padding: 0.9rem 2.5rem;
  font-size: var(--text-lg);
  color: var(--text-primary);
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  border-radius: 10px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-enter:hover {
  background: var(--accent);
  box-shadow: 0 0 25px var(--accent-glow);
}

/* === Portfolio layout === */
.portfolio-content {
  max-width: 1080px;
  margin: 0 auto;
  padding: 2rem 2rem 6rem;
  animation: slide-in-up 0.8s ease-out;
}

.section {
  margin-top: 4rem;
}

@keyframes slide-in-up {
  from { opacity: 0; transform: translateY(30px); }
  to   { opacity: 1; transform: translateY(0); }
}

/* === Hero === */
.hero {
  display: flex;
  gap: 2.5rem;
  align-items: center;
  margin-top: 2rem;
}

.hero-copy {
  flex: 1;
}

.text-highlight {
  color: var(--accent);
  font-size: var(--text-lg);
}

.hero-banner-image {
  min-height: 350px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.hero-banner-image img {
  max-height: 350px;
  max-width: 320px;
  object-fit: contain;
  border-radius: 12px;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

/* === Theme switcher === */
.theme-switcher {
  position: fixed;
  top: 1rem;
  right: 1rem;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1rem;
  background: rgba(5, 6, 10, 0.85);
  border: 1px solid var(--base-border);
  border-radius: 999px;
  backdrop-filter: blur(10px);
  z-index: 60;
}

.theme-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.theme-label.active {
  color: var(--accent);
}

.theme-toggle {
  position: relative;
  width: 52px;
  height: 26px;
  border-radius: 999px;
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  cursor: pointer;
}

.toggle-slider {
  position: absolute;
  top: 2px;
  left: 3px;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  background: var(--accent);
  transition: transform var(--transition-normal);
}

.theme-toggle.cybersecurity .toggle-slider {
  transform: translateX(25px);
}

/* === Skills === */
.skill-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
}

.skill-category {
  padding: 1.25rem;
  background: var(--base-panel);
  border: 1px solid var(--base-border);
  border-radius: 12px;
  animation: slide-in-up 0.6s ease-out;
}

.skill-category h3 {
  color: var(--accent);
  font-size: var(--text-base);
}

/* === Timeline === */
.timeline-item {
  padding: 1.25rem;
  margin-bottom: 1rem;
  background: var(--base-panel);
  border-left: 3px solid var(--accent);
  border-radius: 0 12px 12px 0;
}

.timeline-period {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.timeline-expand-btn {
  margin-top: 0.75rem;
  padding: 0.4rem 1rem;
  font-size: var(--text-sm);
  color: var(--accent);
  background: none;
  border: 1px solid var(--accent);
  border-radius: 8px;
  cursor: pointer;
}

.timeline-details {
  margin-top: 1rem;
  animation: slide-in-up 0.4s ease-out;
}

.achievement-card {
  padding: 0.5rem 0.75rem;
  margin-top: 0.5rem;
  background: var(--accent-soft);
  border-radius: 8px;
  font-size: var(--text-sm);
}

.tech-tag {
  display: inline-block;
  margin: 0.5rem 0.4rem 0 0;
  padding: 0.2rem 0.7rem;
  font-size: var(--text-xs);
  color: var(--accent);
  border: 1px solid var(--accent);
  border-radius: 999px;
}

/* === Credential cards + modal === */
.credential-row {
  display: flex;
  gap: 1.25rem;
  flex-wrap: wrap;
}

.credential-card {
  width: 240px;
  padding: 1rem;
  background: var(--base-panel);
  border: 1px solid var(--base-border);
  border-radius: 12px;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.credential-card:hover {
  transform: translateY(-8px) scale(1.02);
  box-shadow: 0 16px 30px var(--accent-glow);
}

.credential-issuer {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.75);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 90;
}

.modal-content {
  width: min(560px, 90vw);
  max-height: 80vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--base-panel);
  border: 1px solid var(--accent);
  border-radius: 16px;
  animation: slide-in-up 0.3s ease-out;
}

.skill-tag-row {
  margin-top: 1rem;
}

/* === Sidebar === */
.hamburger-btn {
  position: fixed;
  top: 1rem;
  left: 1rem;
  padding: 0.6rem 0.8rem;
  font-size: var(--text-lg);
  color: var(--text-primary);
  background: rgba(5, 6, 10, 0.85);
  border: 1px solid var(--base-border);
  border-radius: 10px;
  cursor: pointer;
  z-index: 70;
}

.sidebar-nav {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  width: 260px;
  padding: 4.5rem 1.25rem 1.25rem;
  background: var(--base-panel);
  border-right: 1px solid var(--base-border);
  transform: translateX(-100%);
  transition: transform var(--transition-normal);
  z-index: 66;
}

.sidebar-nav.active {
  transform: translateX(0);
}

.sidebar-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  z-index: 65;
}

.sidebar-menu-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: 0.7rem 1rem;
  margin-bottom: 0.25rem;
  font-size: var(--text-base);
  color: var(--text-secondary);
  background: none;
  border: none;
  border-radius: 8px;
  cursor: pointer;
}

.sidebar-menu-link:hover {
  background: var(--accent-soft);
  color: var(--text-primary);
}

.sidebar-menu-link.active {
  color: var(--accent);
  background: var(--accent-soft);
}

/* === Notification toast === */
.theme-notification {
  position: fixed;
  top: 20px;
  right: 20px;
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 1rem 1.5rem;
  border-radius: 10px;
  font-weight: 600;
  z-index: 120;
  backdrop-filter: blur(12px);
  animation: toast-in 0.3s ease-out;
}

.theme-notification.ai {
  background: rgba(0, 64, 255, 0.15);
  border: 1px solid rgba(0, 128, 255, 0.5);
  box-shadow: 0 10px 30px rgba(0, 64, 255, 0.4);
}

.theme-notification.cyber {
  background: rgba(0, 0, 0, 0.95);
  border: 2px solid #ff0000;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.8), 0 0 20px rgba(255, 0, 0, 0.6);
  font-family: var(--font-mono);
}

.notification-main {
  font-size: 0.9rem;
  font-weight: bold;
  color: var(--accent);
  text-shadow: 0 0 10px var(--accent-glow);
}

.notification-sub {
  font-size: 0.7rem;
  color: var(--text-secondary);
}

.notification-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--indicator);
  box-shadow: 0 0 8px var(--indicator);
  animation: dot-pulse 1.5s ease-in-out infinite;
}

@keyframes toast-in {
  from { transform: translateX(110%); }
  to   { transform: translateX(0); }
}

@keyframes dot-pulse {
  0%, 100% { opacity: 1; transform: scale(1); }
  50%      { opacity: 0.6; transform: scale(1.25); }
}

/* === Particle field === */
.particle-field {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 1;
}

.particle {
  position: absolute;
  bottom: -5vh;
  border-radius: 50%;
  animation: float-up linear forwards;
}

.particle.micro { width: 2px; height: 2px; animation-duration: 14s; }
.particle.normal { width: 5px; height: 5px; animation-duration: 18s; }
.particle.burst { width: 4px; height: 4px; animation-duration: 10s; }
.particle.orb { width: 24px; height: 24px; filter: blur(2px); animation-duration: 26s; }

.particle.circuit {
  width: 5px;
  height: 5px;
  border-radius: 2px;
  animation: circuit-drift 14s linear forwards;
}

.particle.matrix-drop {
  width: auto;
  height: auto;
  border-radius: 0;
  font-family: var(--font-mono);
  font-weight: bold;
  color: #cc1414;
  text-shadow: 0 0 5px #660c0c;
  top: -5vh;
  bottom: auto;
  animation: matrix-fall 12s linear forwards;
}

@keyframes float-up {
  0%   { transform: translateY(0) scale(1); opacity: 0; }
  10%  { opacity: 0.7; }
  90%  { opacity: 0.7; }
  100% { transform: translateY(-110vh) scale(0.6); opacity: 0; }
}

@keyframes circuit-drift {
  0%   { transform: translateY(0) translateX(0); opacity: 0; }
  10%  { opacity: 0.8; }
  50%  { transform: translateY(-55vh) translateX(40px); }
  100% { transform: translateY(-110vh) translateX(-20px); opacity: 0; }
}

@keyframes matrix-fall {
  0%   { transform: translateY(0); opacity: 0; }
  10%  { opacity: 0.9; }
  100% { transform: translateY(115vh); opacity: 0; }
}

/* === Chat widget === */
.chatbot-bubble {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  border-radius: 50%;
  cursor: pointer;
  z-index: 80;
  box-shadow: 0 0 20px var(--accent-glow);
}

.chatbot-window {
  position: fixed;
  bottom: 6rem;
  right: 1.5rem;
  width: 360px;
  height: 480px;
  display: flex;
  flex-direction: column;
  background: var(--base-panel);
  border: 1px solid var(--accent);
  border-radius: 16px;
  overflow: hidden;
  z-index: 81;
  transition: width var(--transition-normal), height var(--transition-normal);
}

.chatbot-window.maximized {
  width: min(720px, 90vw);
  height: min(80vh, 680px);
}

.chatbot-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1rem;
  background: var(--accent-soft);
  border-bottom: 1px solid var(--base-border);
}

.chatbot-header button {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: var(--text-base);
  cursor: pointer;
  margin-left: 0.5rem;
}

.chatbot-messages {
  flex: 1;
  overflow-y: auto;
  padding: 1rem;
}

.message-row {
  display: flex;
  margin-bottom: 0.6rem;
}

.message-row.user {
  justify-content: flex-end;
}

.message-bubble {
  max-width: 80%;
  padding: 0.6rem 0.9rem;
  border-radius: 12px;
  font-size: var(--text-sm);
}

.message-bubble.user {
  background: var(--accent-soft);
  border: 1px solid var(--accent);
}

.message-bubble.assistant {
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--base-border);
}

.message-bubble.error {
  border-color: #ff3366;
}

.message-time {
  margin-top: 0.25rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.typing-indicator {
  font-size: var(--text-sm);
  color: var(--text-muted);
  padding: 0 1rem 0.5rem;
}

.chat-quick-actions {
  display: flex;
  gap: 0.5rem;
  padding: 0 1rem 0.5rem;
  flex-wrap: wrap;
}

.chat-quick-action {
  padding: 0.25rem 0.7rem;
  font-size: var(--text-xs);
  color: var(--accent);
  background: none;
  border: 1px solid var(--accent);
  border-radius: 999px;
  cursor: pointer;
}

.chatbot-input-row {
  display: flex;
  gap: 0.5rem;
  padding: 0.75rem;
  border-top: 1px solid var(--base-border);
}

.chatbot-input-row textarea {
  flex: 1;
  resize: none;
  padding: 0.5rem 0.75rem;
  font-family: inherit;
  font-size: var(--text-sm);
  color: var(--text-primary);
  background: var(--base-black);
  border: 1px solid var(--base-border);
  border-radius: 8px;
}

.chatbot-input-row button {
  padding: 0.5rem 1rem;
  color: var(--text-primary);
  background: var(--accent-soft);
  border: 1px solid var(--accent);
  border-radius: 8px;
  cursor: pointer;
}
"#;
